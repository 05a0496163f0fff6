//! Request templating, execution and response metrics.
mod client;
mod executor;
mod metrics;
mod template;
mod types;


pub use client::{ClientConfig, build_client};
pub use executor::Executor;
pub use metrics::{count_chars, count_words};
pub use template::RequestTemplate;
pub use types::{FuzzRequest, FuzzResponse};
