use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_KEYWORD, DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_THREADS};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_header, parse_positive_usize, parse_size_arg,
};
use super::types::{OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async HTTP fuzzer: substitutes wordlist entries into a request template and reports the responses your matchers and filters keep."
)]
pub struct FuzzArgs {
    /// Target URL; the keyword (default FUZZ) marks where wordlist entries go
    #[arg(long, short)]
    pub url: Option<String>,

    /// Wordlist file, one candidate per line
    #[arg(long, short)]
    pub wordlist: Option<String>,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// HTTP headers in 'Key: Value' format (repeatable); the keyword may appear in name or value
    #[arg(long, short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request body; the keyword may appear anywhere in it
    #[arg(long, short, default_value = "")]
    pub data: String,

    /// Placeholder replaced by each wordlist entry
    #[arg(long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Number of concurrent requests in flight
    #[arg(
        long,
        short = 't',
        default_value = DEFAULT_THREADS,
        value_parser = parse_positive_usize
    )]
    pub threads: PositiveUsize,

    /// Request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Skip downloading bodies larger than this (bytes, or with K/M/G suffix)
    #[arg(long = "max-size", default_value = "5M", value_parser = parse_size_arg)]
    pub max_download_size: PositiveU64,

    /// Maximum idle connections kept per host
    #[arg(
        long = "pool-max-idle-per-host",
        default_value = DEFAULT_POOL_MAX_IDLE_PER_HOST,
        value_parser = parse_positive_usize
    )]
    pub pool_max_idle_per_host: PositiveUsize,

    /// Proxy URL used for every request
    #[arg(long = "proxy", short = 'x', alias = "proxy-url")]
    pub proxy_url: Option<String>,

    /// Skip TLS certificate and hostname verification
    #[arg(long, short = 'k')]
    pub insecure: bool,

    /// Follow redirects instead of reporting the redirect response
    #[arg(long = "follow-redirects", short = 'r')]
    pub follow_redirects: bool,

    /// Match HTTP status codes (comma separated, '*' for any)
    #[arg(long = "mc")]
    pub match_status: Option<String>,

    /// Match response size (code points, comma separated)
    #[arg(long = "ms")]
    pub match_size: Option<String>,

    /// Match response word count (comma separated)
    #[arg(long = "mw")]
    pub match_words: Option<String>,

    /// Filter out HTTP status codes (comma separated, '*' for any)
    #[arg(long = "fc")]
    pub filter_status: Option<String>,

    /// Filter out response sizes (code points, comma separated)
    #[arg(long = "fs")]
    pub filter_size: Option<String>,

    /// Filter out response word counts (comma separated)
    #[arg(long = "fw")]
    pub filter_words: Option<String>,

    /// Print only the matching inputs, no banner or progress
    #[arg(long, short = 's')]
    pub quiet: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Write matched results to this file on exit
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Format for --output
    #[arg(long = "output-format", alias = "of", ignore_case = true)]
    pub output_format: Option<OutputFormat>,

    /// Enable verbose logging (sets log level to debug unless overridden by FUZZSIFT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./fuzzsift.toml or ./fuzzsift.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
