//! Matchers and filters deciding which responses get reported.
//!
//! Both roles share the [`Filter`] capability; a [`FilterChain`] holds one
//! ordered list of each and applies the match-then-filter decision.
mod chain;
mod size;
mod status;
mod words;


use std::fmt;

use crate::error::FilterError;
use crate::http::FuzzResponse;

pub use chain::FilterChain;
pub use size::SizeFilter;
pub use status::{StatusFilter, StatusValue};
pub use words::WordsFilter;

/// A configured rule evaluated against a response.
pub trait Filter: fmt::Debug + Send + Sync {
    /// Whether the rule accepts the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the response lacks the data the rule inspects.
    fn filter(&self, response: &FuzzResponse) -> Result<bool, FilterError>;

    /// Stable description of the configuration, used in the banner.
    fn repr(&self) -> String;
}

/// Response property a predicate inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Status,
    Size,
    Words,
}

/// Builds a predicate of the given kind from its specification string.
///
/// # Errors
///
/// Returns an error naming the flag pair when the specification is invalid.
pub fn new_filter(kind: FilterKind, value: &str) -> Result<Box<dyn Filter>, FilterError> {
    let filter: Box<dyn Filter> = match kind {
        FilterKind::Status => Box::new(StatusFilter::new(value)?),
        FilterKind::Size => Box::new(SizeFilter::new(value)?),
        FilterKind::Words => Box::new(WordsFilter::new(value)?),
    };
    Ok(filter)
}

/// Parses a comma separated list of non-negative integers.
fn parse_counts(value: &str, context: &'static str) -> Result<Vec<u64>, FilterError> {
    if value.trim().is_empty() {
        return Err(FilterError::EmptyValue { context });
    }
    value
        .split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<u64>()
                .map_err(|_err| FilterError::InvalidValue {
                    context,
                    value: value.to_owned(),
                })
        })
        .collect()
}

fn join_counts(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
