use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{context}: invalid value {value}")]
    InvalidValue {
        context: &'static str,
        value: String,
    },
    #[error("{context}: value must not be empty")]
    EmptyValue { context: &'static str },
    #[error("Response metric '{metric}' is not available for {url}.")]
    MetricUnavailable { metric: &'static str, url: String },
}
