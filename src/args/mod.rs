//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use cli::FuzzArgs;
pub use types::{OutputFormat, PositiveU64, PositiveUsize};

pub(crate) use defaults::{DEFAULT_MATCH_STATUS, DEFAULT_MAX_DOWNLOAD_SIZE, DEFAULT_USER_AGENT};
pub(crate) use parsers::parse_header;
