//! Console presentation and result persistence.
mod format;
mod record;
mod stdout;


use crate::error::OutputError;
use crate::filter::FilterChain;
use crate::http::FuzzResponse;

pub use format::{format_banner, format_result_line, line_clear};
pub use record::{ResultRecord, write_records};
pub use stdout::{OutputSettings, Stdoutput};

/// Everything the job reports to the user goes through this trait.
pub trait OutputProvider: Send {
    fn banner(&mut self, chain: &FilterChain);

    /// Replaces the current status line.
    fn progress(&mut self, status: &str);

    fn error(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    /// Applies the chain to `response`; prints and records it when reportable.
    /// Returns whether it was reported.
    fn result(&mut self, response: &FuzzResponse, chain: &FilterChain) -> bool;

    /// Flushes collected results to the configured output file.
    ///
    /// # Errors
    ///
    /// Implementations may surface persistence failures; [`Stdoutput`] reports
    /// them through [`OutputProvider::error`] instead.
    fn finalize(&mut self) -> Result<(), OutputError>;
}
