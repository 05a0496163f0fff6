/// A concrete request produced from a template and one fuzz value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzRequest {
    pub method: String,
    pub url: String,
    /// Header names keep their original spelling; lookups are case-insensitive.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// The wordlist entry this request was built from.
    pub input: Vec<u8>,
}

impl FuzzRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Sets a header, replacing any existing header with the same name.
    pub fn set_header(&mut self, name: String, value: String) {
        if let Some(slot) = self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            *slot = (name, value);
        } else {
            self.headers.push((name, value));
        }
    }

    #[must_use]
    pub fn input_lossy(&self) -> String {
        String::from_utf8_lossy(&self.input).into_owned()
    }
}

/// Outcome of executing a [`FuzzRequest`].
#[derive(Debug, Clone)]
pub struct FuzzResponse {
    pub status: i64,
    /// Unicode code points in the body; the byte size when `cancelled` is set.
    pub content_length: u64,
    pub words: u64,
    /// Empty when `cancelled` is set.
    pub body: Vec<u8>,
    /// URL of the final response (after redirects when they are followed).
    pub url: String,
    pub request: FuzzRequest,
    /// The body exceeded the download ceiling and was not kept.
    pub cancelled: bool,
}
