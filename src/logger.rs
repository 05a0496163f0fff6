use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when neither `FUZZSIFT_LOG` nor `RUST_LOG` is set. Results own
/// stdout and the status line owns stderr, so only warnings get through.
const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber; diagnostics go to stderr.
pub fn init_logging(verbose: bool, no_color: bool) {
    let fallback = default_directive(verbose);
    let filter = std::env::var("FUZZSIFT_LOG")
        .or_else(|_err| std::env::var("RUST_LOG"))
        .map_or_else(
            |_err| EnvFilter::new(fallback),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_err| EnvFilter::new(fallback)),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
