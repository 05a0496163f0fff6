use tracing::debug;

use crate::args::{DEFAULT_MATCH_STATUS, FuzzArgs};
use crate::error::FilterError;
use crate::http::FuzzResponse;

use super::{Filter, FilterKind, new_filter};

/// Ordered matchers and filters.
///
/// A response is reportable when at least one matcher accepts it and no filter
/// does. Predicates that fail to evaluate count as "did not accept".
#[derive(Debug, Default)]
pub struct FilterChain {
    matchers: Vec<Box<dyn Filter>>,
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the chain from `--mc/--ms/--mw` and `--fc/--fs/--fw`. Falls back
    /// to the default status matcher when no matcher is given.
    ///
    /// # Errors
    ///
    /// Returns the first invalid predicate specification.
    pub fn from_args(args: &FuzzArgs) -> Result<Self, FilterError> {
        let mut chain = Self::new();
        let matchers = [
            (FilterKind::Status, args.match_status.as_deref()),
            (FilterKind::Size, args.match_size.as_deref()),
            (FilterKind::Words, args.match_words.as_deref()),
        ];
        for (kind, value) in matchers {
            if let Some(value) = value {
                chain.add_matcher(kind, value)?;
            }
        }
        if chain.matchers.is_empty() {
            chain.add_matcher(FilterKind::Status, DEFAULT_MATCH_STATUS)?;
        }

        let filters = [
            (FilterKind::Status, args.filter_status.as_deref()),
            (FilterKind::Size, args.filter_size.as_deref()),
            (FilterKind::Words, args.filter_words.as_deref()),
        ];
        for (kind, value) in filters {
            if let Some(value) = value {
                chain.add_filter(kind, value)?;
            }
        }
        Ok(chain)
    }

    /// # Errors
    ///
    /// Returns an error when the specification is invalid.
    pub fn add_matcher(&mut self, kind: FilterKind, value: &str) -> Result<(), FilterError> {
        self.push_matcher(new_filter(kind, value)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the specification is invalid.
    pub fn add_filter(&mut self, kind: FilterKind, value: &str) -> Result<(), FilterError> {
        self.push_filter(new_filter(kind, value)?);
        Ok(())
    }

    pub fn push_matcher(&mut self, matcher: Box<dyn Filter>) {
        self.matchers.push(matcher);
    }

    pub fn push_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    #[must_use]
    pub fn matchers(&self) -> &[Box<dyn Filter>] {
        &self.matchers
    }

    #[must_use]
    pub fn filters(&self) -> &[Box<dyn Filter>] {
        &self.filters
    }

    #[must_use]
    pub fn is_reportable(&self, response: &FuzzResponse) -> bool {
        if !any_accepts(&self.matchers, response, "matcher") {
            return false;
        }
        !any_accepts(&self.filters, response, "filter")
    }
}

/// Evaluates in insertion order and stops at the first acceptance.
fn any_accepts(predicates: &[Box<dyn Filter>], response: &FuzzResponse, role: &str) -> bool {
    predicates
        .iter()
        .any(|predicate| match predicate.filter(response) {
            Ok(accepted) => accepted,
            Err(err) => {
                debug!("Skipping {} '{}': {}", role, predicate.repr(), err);
                false
            }
        })
}
