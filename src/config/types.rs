use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::{parse_duration_arg, parse_size_arg};
use crate::args::{OutputFormat, PositiveU64};
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub wordlist: Option<String>,
    pub method: Option<String>,
    pub headers: Option<Vec<String>>,
    pub data: Option<String>,
    pub keyword: Option<String>,
    pub threads: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub max_size: Option<SizeValue>,
    pub pool_max_idle_per_host: Option<usize>,
    #[serde(alias = "proxy_url")]
    pub proxy: Option<String>,
    pub insecure: Option<bool>,
    pub follow_redirects: Option<bool>,
    pub matchers: Option<PredicateConfig>,
    pub filters: Option<PredicateConfig>,
    pub quiet: Option<bool>,
    pub no_color: Option<bool>,
    pub output: Option<String>,
    pub output_format: Option<OutputFormat>,
}

/// Predicate specification strings, one per response metric.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredicateConfig {
    pub status: Option<String>,
    pub size: Option<String>,
    pub words: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(0) => {
                Err(AppError::config(ConfigError::FieldMustBePositive { field }))
            }
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| match err {
                AppError::Validation(source) => {
                    AppError::config(ConfigError::InvalidField { field, source })
                }
                other => other,
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Bytes(u64),
    Text(String),
}

impl SizeValue {
    pub(crate) fn to_bytes(&self, field: &'static str) -> AppResult<PositiveU64> {
        match self {
            SizeValue::Bytes(bytes) => PositiveU64::try_from(*bytes)
                .map_err(|_err| AppError::config(ConfigError::FieldMustBePositive { field })),
            SizeValue::Text(text) => parse_size_arg(text).map_err(|err| match err {
                AppError::Validation(source) => {
                    AppError::config(ConfigError::InvalidField { field, source })
                }
                other => other,
            }),
        }
    }
}
