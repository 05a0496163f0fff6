use crate::error::FilterError;
use crate::http::FuzzResponse;

use super::{Filter, join_counts, parse_counts};

const CONTEXT: &str = "Word filter or matcher (-fw / -mw)";

/// Accepts responses whose word count is one of the configured values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsFilter {
    values: Vec<u64>,
}

impl WordsFilter {
    /// # Errors
    ///
    /// Returns an error when the list is empty or holds a non-numeric entry.
    pub fn new(value: &str) -> Result<Self, FilterError> {
        Ok(Self {
            values: parse_counts(value, CONTEXT)?,
        })
    }
}

impl Filter for WordsFilter {
    fn filter(&self, response: &FuzzResponse) -> Result<bool, FilterError> {
        if response.cancelled {
            return Err(FilterError::MetricUnavailable {
                metric: "words",
                url: response.url.clone(),
            });
        }
        Ok(self.values.contains(&response.words))
    }

    fn repr(&self) -> String {
        format!("Response words: {}", join_counts(&self.values))
    }
}
