use std::time::Duration;

/// Status line shown while the run progresses.
#[must_use]
pub fn format_progress(processed: usize, total: usize, elapsed: Duration, errors: usize) -> String {
    let secs = elapsed.as_secs();
    let rate = u64::try_from(processed)
        .unwrap_or(u64::MAX)
        .checked_div(secs)
        .unwrap_or_else(|| u64::try_from(processed).unwrap_or(u64::MAX));
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    format!(
        ":: Progress: [{}/{}] :: {} req/sec :: Duration: [{}:{:02}:{:02}] :: Errors: {} ::",
        processed, total, rate, hours, minutes, seconds, errors
    )
}
