use super::*;

#[test]
fn parse_args_matchers_and_filters() -> AppResult<()> {
    let args = parse_test_args([
        "fuzzsift",
        "-u",
        "http://localhost/FUZZ",
        "--mc",
        "200,301",
        "--fc",
        "404",
        "--fs",
        "0",
        "--mw",
        "12",
    ])?;
    if args.match_status.as_deref() != Some("200,301") {
        return Err(AppError::validation("Unexpected match_status"));
    }
    if args.filter_status.as_deref() != Some("404") {
        return Err(AppError::validation("Unexpected filter_status"));
    }
    if args.filter_size.as_deref() != Some("0") {
        return Err(AppError::validation("Unexpected filter_size"));
    }
    if args.match_words.as_deref() != Some("12") {
        return Err(AppError::validation("Unexpected match_words"));
    }
    Ok(())
}

#[test]
fn parse_args_transport_switches() -> AppResult<()> {
    let args = parse_test_args([
        "fuzzsift",
        "-u",
        "https://localhost/FUZZ",
        "-k",
        "-r",
        "-x",
        "http://127.0.0.1:8080",
        "--timeout",
        "1500ms",
        "-t",
        "8",
    ])?;
    if !args.insecure {
        return Err(AppError::validation("Expected insecure"));
    }
    if !args.follow_redirects {
        return Err(AppError::validation("Expected follow_redirects"));
    }
    if args.proxy_url.as_deref() != Some("http://127.0.0.1:8080") {
        return Err(AppError::validation("Unexpected proxy_url"));
    }
    if args.request_timeout != Duration::from_millis(1500) {
        return Err(AppError::validation("Unexpected request_timeout"));
    }
    if args.threads.get() != 8 {
        return Err(AppError::validation("Unexpected threads"));
    }
    Ok(())
}

#[test]
fn parse_args_output_format_alias() -> AppResult<()> {
    let args = parse_test_args([
        "fuzzsift",
        "-u",
        "http://localhost/FUZZ",
        "-o",
        "results.json",
        "--of",
        "JSON",
    ])?;
    if args.output.as_deref() != Some("results.json") {
        return Err(AppError::validation("Unexpected output"));
    }
    if args.output_format != Some(OutputFormat::Json) {
        return Err(AppError::validation("Unexpected output_format"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_threads() -> AppResult<()> {
    if parse_test_args(["fuzzsift", "-u", "http://localhost/FUZZ", "-t", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero threads to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for {}: {:?}",
                input, parsed
            )));
        }
    }
    if parse_duration_arg("0s").is_ok() {
        return Err(AppError::validation("Expected zero duration to be rejected"));
    }
    Ok(())
}
