mod app;
mod config;
mod filter;
mod http;
mod output;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use filter::FilterError;
pub use http::HttpError;
pub use output::OutputError;
pub use validation::ValidationError;
