use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{FuzzArgs, PositiveUsize, parse_header};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, PredicateConfig};

/// Applies configuration values to CLI arguments.
///
/// Values given explicitly on the command line always win over the file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut FuzzArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "wordlist")
        && let Some(wordlist) = config.wordlist.clone()
    {
        args.wordlist = Some(wordlist);
    }

    if !is_cli(matches, "method")
        && let Some(method) = config.method.clone()
    {
        args.method = method;
    }

    if !is_cli(matches, "headers")
        && let Some(headers) = config.headers.as_ref()
    {
        args.headers = parse_headers(headers)?;
    }

    if !is_cli(matches, "data")
        && let Some(data) = config.data.clone()
    {
        args.data = data;
    }

    if !is_cli(matches, "keyword")
        && let Some(keyword) = config.keyword.clone()
    {
        args.keyword = keyword;
    }

    if !is_cli(matches, "threads")
        && let Some(threads) = config.threads
    {
        args.threads = ensure_positive_usize(threads, "threads")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration("timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration("connect_timeout")?;
    }

    if !is_cli(matches, "max_download_size")
        && let Some(size) = config.max_size.as_ref()
    {
        args.max_download_size = size.to_bytes("max_size")?;
    }

    if !is_cli(matches, "pool_max_idle_per_host")
        && let Some(max_idle) = config.pool_max_idle_per_host
    {
        args.pool_max_idle_per_host = ensure_positive_usize(max_idle, "pool_max_idle_per_host")?;
    }

    if !is_cli(matches, "proxy_url")
        && let Some(proxy) = config.proxy.clone()
    {
        args.proxy_url = Some(proxy);
    }

    if !is_cli(matches, "insecure")
        && let Some(insecure) = config.insecure
    {
        args.insecure = insecure;
    }

    if !is_cli(matches, "follow_redirects")
        && let Some(follow) = config.follow_redirects
    {
        args.follow_redirects = follow;
    }

    if let Some(matchers) = config.matchers.as_ref() {
        apply_predicates(
            matches,
            matchers,
            [
                ("match_status", &mut args.match_status),
                ("match_size", &mut args.match_size),
                ("match_words", &mut args.match_words),
            ],
        );
    }

    if let Some(filters) = config.filters.as_ref() {
        apply_predicates(
            matches,
            filters,
            [
                ("filter_status", &mut args.filter_status),
                ("filter_size", &mut args.filter_size),
                ("filter_words", &mut args.filter_words),
            ],
        );
    }

    if !is_cli(matches, "quiet")
        && let Some(quiet) = config.quiet
    {
        args.quiet = quiet;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = Some(format);
    }

    Ok(())
}

/// Fills status/size/words slots, in that order, from a predicate table.
fn apply_predicates(
    matches: &ArgMatches,
    config: &PredicateConfig,
    slots: [(&str, &mut Option<String>); 3],
) {
    let values = [&config.status, &config.size, &config.words];
    for ((name, slot), value) in slots.into_iter().zip(values) {
        if !is_cli(matches, name)
            && let Some(value) = value.clone()
        {
            *slot = Some(value);
        }
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|_err| AppError::config(ConfigError::FieldMustBePositive { field }))
}

fn parse_headers(headers: &[String]) -> AppResult<Vec<(String, String)>> {
    let mut parsed = Vec::with_capacity(headers.len());
    for header in headers {
        parsed.push(
            parse_header(header)
                .map_err(|err| AppError::config(ConfigError::InvalidHeader { source: err }))?,
        );
    }
    Ok(parsed)
}
