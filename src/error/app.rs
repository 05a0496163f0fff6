use thiserror::Error;

use super::{ConfigError, FilterError, HttpError, OutputError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Matcher/filter error: {0}")]
    Filter(#[from] FilterError),
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn output<E>(error: E) -> Self
    where
        E: Into<OutputError>,
    {
        error.into().into()
    }
}
