use futures_util::StreamExt;
use reqwest::header::{CONTENT_LENGTH, HOST, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Body, Client, Method, Request, Url};
use tracing::debug;

use crate::args::{DEFAULT_MAX_DOWNLOAD_SIZE, DEFAULT_USER_AGENT};
use crate::error::HttpError;
use crate::shutdown::ShutdownReceiver;

use super::metrics::{count_chars, count_words};
use super::types::{FuzzRequest, FuzzResponse};

/// Sends fuzz requests over one shared, pooled client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Executor {
    client: Client,
    max_download_size: u64,
}

enum BodyRead {
    Complete(Vec<u8>),
    /// The stream crossed the ceiling after this many bytes.
    OverLimit(u64),
}

impl Executor {
    #[must_use]
    pub const fn new(client: Client, max_download_size: u64) -> Self {
        Self {
            client,
            max_download_size,
        }
    }

    #[must_use]
    pub const fn with_default_limit(client: Client) -> Self {
        Self::new(client, DEFAULT_MAX_DOWNLOAD_SIZE)
    }

    /// Executes one request. Returns early with [`HttpError::Cancelled`] once
    /// `shutdown` fires (a closed channel counts as fired).
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built, the transport fails,
    /// the body cannot be read, or the run is cancelled.
    pub async fn execute(
        &self,
        request: &FuzzRequest,
        shutdown: &mut ShutdownReceiver,
    ) -> Result<FuzzResponse, HttpError> {
        tokio::select! {
            _ = shutdown.recv() => Err(HttpError::Cancelled {
                url: request.url.clone(),
            }),
            result = self.send(request) => result,
        }
    }

    async fn send(&self, request: &FuzzRequest) -> Result<FuzzResponse, HttpError> {
        let outbound = build_request(request)?;
        let response = self
            .client
            .execute(outbound)
            .await
            .map_err(|err| HttpError::from_transport(&request.url, err))?;

        let status = i64::from(response.status().as_u16());
        let url = response.url().to_string();

        if let Some(declared) = declared_length(response.headers())
            && declared > self.max_download_size
        {
            debug!(
                "Skipping body of {} ({} bytes declared, limit {})",
                url, declared, self.max_download_size
            );
            return Ok(FuzzResponse {
                status,
                content_length: declared,
                words: 0,
                body: Vec::new(),
                url,
                request: request.clone(),
                cancelled: true,
            });
        }

        match read_body_capped(response, self.max_download_size).await {
            Ok(BodyRead::Complete(body)) => Ok(FuzzResponse {
                status,
                content_length: count_chars(&body),
                words: count_words(&body),
                body,
                url,
                request: request.clone(),
                cancelled: false,
            }),
            Ok(BodyRead::OverLimit(streamed)) => {
                debug!(
                    "Body of {} exceeded {} bytes while streaming",
                    url, self.max_download_size
                );
                Ok(FuzzResponse {
                    status,
                    content_length: streamed,
                    words: 0,
                    body: Vec::new(),
                    url,
                    request: request.clone(),
                    cancelled: true,
                })
            }
            Err(err) => Err(if err.is_timeout() {
                HttpError::Timeout { url }
            } else {
                HttpError::ReadBody { url, source: err }
            }),
        }
    }
}

fn build_request(request: &FuzzRequest) -> Result<Request, HttpError> {
    let method =
        Method::from_bytes(request.method.as_bytes()).map_err(|_err| HttpError::InvalidMethod {
            method: request.method.clone(),
        })?;
    let url = Url::parse(&request.url).map_err(|err| HttpError::InvalidUrl {
        url: request.url.clone(),
        source: err,
    })?;

    let mut headers = HeaderMap::with_capacity(request.headers.len().saturating_add(1));
    for (name, value) in &request.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_err| HttpError::InvalidHeaderName { name: name.clone() })?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_err| HttpError::InvalidHeaderValue { name: name.clone() })?;
        headers.insert(header_name, header_value);
    }
    if !headers.contains_key(USER_AGENT) {
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    }
    if let Some(host) = headers.get(HOST) {
        debug!("Overriding Host for {} with {:?}", request.url, host);
    }

    let mut outbound = Request::new(method, url);
    *outbound.headers_mut() = headers;
    if !request.body.is_empty() {
        *outbound.body_mut() = Some(Body::from(request.body.clone()));
    }
    Ok(outbound)
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

async fn read_body_capped(
    response: reqwest::Response,
    limit: u64,
) -> Result<BodyRead, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::new();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
        if total_bytes > limit {
            return Ok(BodyRead::OverLimit(total_bytes));
        }
        body.extend_from_slice(&bytes);
    }
    Ok(BodyRead::Complete(body))
}
