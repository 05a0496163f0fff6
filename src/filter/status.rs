use crate::error::FilterError;
use crate::http::FuzzResponse;

use super::Filter;

const CONTEXT: &str = "Status filter or matcher (-fc / -mc)";

/// One entry of a status predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusValue {
    /// The `*` wildcard; accepts every status, including ones no server sends.
    Any,
    Code(i64),
}

impl StatusValue {
    #[must_use]
    pub const fn accepts(self, status: i64) -> bool {
        match self {
            StatusValue::Any => true,
            StatusValue::Code(code) => code == status,
        }
    }
}

/// Accepts responses whose status is one of the configured codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    values: Vec<StatusValue>,
}

impl StatusFilter {
    /// Parses `200,301,404` style lists; `*` (or `all`) matches any status.
    ///
    /// # Errors
    ///
    /// Returns an error for empty lists, empty entries, negative or
    /// non-numeric codes.
    pub fn new(value: &str) -> Result<Self, FilterError> {
        if value.trim().is_empty() {
            return Err(FilterError::EmptyValue { context: CONTEXT });
        }
        let values = value
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                if entry == "*" || entry.eq_ignore_ascii_case("all") {
                    return Ok(StatusValue::Any);
                }
                match entry.parse::<i64>() {
                    Ok(code) if code >= 0 => Ok(StatusValue::Code(code)),
                    Ok(_) | Err(_) => Err(FilterError::InvalidValue {
                        context: CONTEXT,
                        value: value.to_owned(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[StatusValue] {
        &self.values
    }
}

impl Filter for StatusFilter {
    fn filter(&self, response: &FuzzResponse) -> Result<bool, FilterError> {
        Ok(self
            .values
            .iter()
            .any(|value| value.accepts(response.status)))
    }

    fn repr(&self) -> String {
        let values = self
            .values
            .iter()
            .map(|value| match value {
                StatusValue::Any => "*".to_owned(),
                StatusValue::Code(code) => code.to_string(),
            })
            .collect::<Vec<_>>()
            .join(",");
        format!("Response status: {}", values)
    }
}
