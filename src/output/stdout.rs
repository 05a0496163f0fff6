use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use crossterm::style::{Color, Stylize};
use tracing::{debug, warn};

use crate::args::{FuzzArgs, OutputFormat};
use crate::error::OutputError;
use crate::filter::FilterChain;
use crate::http::FuzzResponse;

use super::OutputProvider;
use super::format::{format_banner, format_result_line, line_clear};
use super::record::{ResultRecord, write_records};

/// Presentation switches for [`Stdoutput`].
#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub method: String,
    pub url: String,
    pub quiet: bool,
    pub colors: bool,
    pub output_file: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl OutputSettings {
    /// Colours are used only when enabled and stdout is a terminal.
    #[must_use]
    pub fn from_args(args: &FuzzArgs) -> Self {
        Self {
            method: args.method.clone(),
            url: args.url.clone().unwrap_or_default(),
            quiet: args.quiet,
            colors: !args.no_color && std::io::stdout().is_terminal(),
            output_file: args.output.as_ref().map(PathBuf::from),
            output_format: args.output_format.unwrap_or(OutputFormat::Json),
        }
    }
}

/// Prints results to stdout, status and diagnostics to stderr, and keeps the
/// reported responses for [`OutputProvider::finalize`].
#[derive(Debug)]
pub struct Stdoutput {
    settings: OutputSettings,
    results: Vec<ResultRecord>,
    progress_shown: bool,
}

impl Stdoutput {
    #[must_use]
    pub const fn new(settings: OutputSettings) -> Self {
        Self {
            settings,
            results: Vec::new(),
            progress_shown: false,
        }
    }

    #[must_use]
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    fn write_results(&self) -> Result<(), OutputError> {
        let Some(path) = self.settings.output_file.as_ref() else {
            return Ok(());
        };
        match self.settings.output_format {
            OutputFormat::Json => write_records(path, &self.results),
        }
    }

    fn print_stderr(&self, prefix: &str, color: Color, message: &str) {
        let prefix = if self.settings.colors {
            prefix.with(color).to_string()
        } else {
            prefix.to_owned()
        };
        let mut err = std::io::stderr().lock();
        if let Err(write_err) = writeln!(err, "{}{} {}", line_clear(), prefix, message) {
            debug!("Failed to write to stderr: {}", write_err);
        }
    }
}

impl OutputProvider for Stdoutput {
    fn banner(&mut self, chain: &FilterChain) {
        if self.settings.quiet {
            return;
        }
        let mut err = std::io::stderr().lock();
        for line in format_banner(&self.settings.method, &self.settings.url, chain) {
            if let Err(write_err) = writeln!(err, "{}", line) {
                debug!("Failed to write banner: {}", write_err);
                return;
            }
        }
        if let Err(write_err) = writeln!(err) {
            debug!("Failed to write banner: {}", write_err);
        }
    }

    fn progress(&mut self, status: &str) {
        if self.settings.quiet {
            return;
        }
        let mut err = std::io::stderr().lock();
        let written = write!(err, "{}{}", line_clear(), status).and_then(|()| err.flush());
        if let Err(write_err) = written {
            debug!("Failed to write progress: {}", write_err);
        }
        self.progress_shown = true;
    }

    fn error(&mut self, message: &str) {
        self.print_stderr("[ERR]", Color::Red, message);
    }

    fn warning(&mut self, message: &str) {
        self.print_stderr("[WARN]", Color::Yellow, message);
    }

    fn result(&mut self, response: &FuzzResponse, chain: &FilterChain) -> bool {
        if !chain.is_reportable(response) {
            return false;
        }
        let line = format_result_line(response, self.settings.quiet, self.settings.colors);
        let mut out = std::io::stdout().lock();
        if let Err(write_err) = writeln!(out, "{}", line) {
            warn!("Failed to print result for {}: {}", response.url, write_err);
        }
        if self.settings.output_file.is_some() {
            self.results.push(ResultRecord::from(response));
        }
        true
    }

    fn finalize(&mut self) -> Result<(), OutputError> {
        if self.progress_shown {
            let mut err = std::io::stderr().lock();
            if let Err(write_err) = writeln!(err) {
                debug!("Failed to end progress line: {}", write_err);
            }
            self.progress_shown = false;
        }
        if let Err(err) = self.write_results() {
            warn!("{}", err);
            self.error(&err.to_string());
        }
        Ok(())
    }
}
