use reqwest::Method;

use crate::error::{AppError, AppResult, HttpError, ValidationError};

use super::types::FuzzRequest;

/// Request definition with keyword markers, turned into one [`FuzzRequest`]
/// per wordlist entry.
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    keyword: String,
    method: String,
    url: String,
    static_headers: Vec<(String, String)>,
    fuzz_headers: Vec<(String, String)>,
    body: String,
}

impl RequestTemplate {
    /// Builds a template. Headers mentioning the keyword in their name or value
    /// become fuzz headers, the rest are copied verbatim into every request.
    ///
    /// # Errors
    ///
    /// Returns an error when the keyword is empty or the method is not a valid
    /// HTTP token.
    pub fn new(
        keyword: &str,
        method: &str,
        url: &str,
        headers: Vec<(String, String)>,
        body: &str,
    ) -> AppResult<Self> {
        if keyword.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyKeyword));
        }
        if Method::from_bytes(method.as_bytes()).is_err() {
            return Err(AppError::http(HttpError::InvalidMethod {
                method: method.to_owned(),
            }));
        }

        let (fuzz_headers, static_headers): (Vec<_>, Vec<_>) = headers
            .into_iter()
            .partition(|(name, value)| name.contains(keyword) || value.contains(keyword));

        Ok(Self {
            keyword: keyword.to_owned(),
            method: method.to_owned(),
            url: url.to_owned(),
            static_headers,
            fuzz_headers,
            body: body.to_owned(),
        })
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the keyword appears in at least one fuzzable field.
    #[must_use]
    pub fn uses_keyword(&self) -> bool {
        self.url.contains(&self.keyword)
            || self.body.contains(&self.keyword)
            || !self.fuzz_headers.is_empty()
    }

    /// Replaces every keyword occurrence with `input` in the URL, each fuzz
    /// header name and value, and the body.
    #[must_use]
    pub fn prepare(&self, input: &[u8]) -> FuzzRequest {
        let value = String::from_utf8_lossy(input);
        let mut request = FuzzRequest {
            method: self.method.clone(),
            url: self.url.replace(&self.keyword, &value),
            headers: self.static_headers.clone(),
            body: substitute_bytes(&self.body, &self.keyword, input),
            input: input.to_vec(),
        };
        for (name, header_value) in &self.fuzz_headers {
            request.set_header(
                name.replace(&self.keyword, &value),
                header_value.replace(&self.keyword, &value),
            );
        }
        request
    }
}

/// Like `str::replace`, but splices the raw input bytes so non-UTF-8 values
/// reach the body unchanged.
fn substitute_bytes(template: &str, keyword: &str, input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(template.len());
    let mut parts = template.split(keyword);
    if let Some(first) = parts.next() {
        output.extend_from_slice(first.as_bytes());
    }
    for part in parts {
        output.extend_from_slice(input);
        output.extend_from_slice(part.as_bytes());
    }
    output
}
