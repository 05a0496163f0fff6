use crossterm::Command;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::filter::FilterChain;
use crate::http::FuzzResponse;

/// Carriage return followed by the ANSI "erase line" command.
#[must_use]
pub fn line_clear() -> String {
    let mut sequence = String::from("\r");
    if Clear(ClearType::CurrentLine).write_ansi(&mut sequence).is_err() {
        sequence.push_str("\x1b[2K");
    }
    sequence
}

/// One reported response.
///
/// Quiet mode prints the raw input only; otherwise status, length, words and
/// the final URL in fixed-width columns.
#[must_use]
pub fn format_result_line(response: &FuzzResponse, quiet: bool, colors: bool) -> String {
    if quiet {
        return response.request.input_lossy();
    }
    let status = format!("{:<3}", response.status);
    let status = match status_color(response.status) {
        Some(color) if colors => status.with(color).to_string(),
        Some(_) | None => status,
    };
    format!(
        "{} {} {:<9} {:<5} {}",
        line_clear(),
        status,
        response.content_length,
        response.words,
        response.url
    )
}

const fn status_color(status: i64) -> Option<Color> {
    match status {
        200..=299 => Some(Color::Green),
        300..=399 => Some(Color::Blue),
        400..=499 => Some(Color::Yellow),
        500..=599 => Some(Color::Red),
        _ => None,
    }
}

/// Header block printed before the run starts.
#[must_use]
pub fn format_banner(method: &str, url: &str, chain: &FilterChain) -> Vec<String> {
    let mut lines = vec![
        format!("fuzzsift v{}", env!("CARGO_PKG_VERSION")),
        String::new(),
        option_line("Method", method),
        option_line("URL", url),
    ];
    for matcher in chain.matchers() {
        lines.push(option_line("Matcher", &matcher.repr()));
    }
    for filter in chain.filters() {
        lines.push(option_line("Filter", &filter.repr()));
    }
    lines
}

fn option_line(name: &str, value: &str) -> String {
    format!(" :: {:<12} : {}", name, value)
}
