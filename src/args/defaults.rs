pub(crate) const DEFAULT_USER_AGENT: &str = concat!("fuzzsift/", env!("CARGO_PKG_VERSION"));

/// Marker replaced by each wordlist entry.
pub(crate) const DEFAULT_KEYWORD: &str = "FUZZ";

/// Status codes matched when no matcher is configured.
pub(crate) const DEFAULT_MATCH_STATUS: &str = "200,204,301,302,307,401,403";

/// Responses declaring a larger body are not downloaded (5 MiB).
pub(crate) const DEFAULT_MAX_DOWNLOAD_SIZE: u64 = 5 * 1024 * 1024;

pub(crate) const DEFAULT_THREADS: &str = "40";
pub(crate) const DEFAULT_POOL_MAX_IDLE_PER_HOST: &str = "500";
