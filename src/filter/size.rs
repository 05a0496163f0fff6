use crate::error::FilterError;
use crate::http::FuzzResponse;

use super::{Filter, join_counts, parse_counts};

const CONTEXT: &str = "Size filter or matcher (-fs / -ms)";

/// Accepts responses whose content length is one of the configured values.
///
/// For responses whose body was skipped the length is the byte size reported
/// by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeFilter {
    values: Vec<u64>,
}

impl SizeFilter {
    /// # Errors
    ///
    /// Returns an error when the list is empty or holds a non-numeric entry.
    pub fn new(value: &str) -> Result<Self, FilterError> {
        Ok(Self {
            values: parse_counts(value, CONTEXT)?,
        })
    }
}

impl Filter for SizeFilter {
    fn filter(&self, response: &FuzzResponse) -> Result<bool, FilterError> {
        Ok(self.values.contains(&response.content_length))
    }

    fn repr(&self) -> String {
        format!("Response size: {}", join_counts(&self.values))
    }
}
