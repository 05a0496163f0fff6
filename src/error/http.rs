use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid HTTP method '{method}'.")]
    InvalidMethod { method: String },
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName { name: String },
    #[error("Invalid value for header '{name}'.")]
    InvalidHeaderValue { name: String },
    #[error("Invalid proxy URL '{url}': {source}")]
    InvalidProxyUrl {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} timed out.")]
    Timeout { url: String },
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} was cancelled.")]
    Cancelled { url: String },
}

impl HttpError {
    pub(crate) fn from_transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_owned(),
            }
        } else if source.is_builder() {
            Self::BuildRequestFailed { source }
        } else {
            Self::RequestFailed {
                url: url.to_owned(),
                source,
            }
        }
    }
}
