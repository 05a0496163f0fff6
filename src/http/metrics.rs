//! Response body metrics.

/// Number of Unicode code points in the body. Every byte that is not part of
/// a valid UTF-8 sequence counts as one character on its own.
#[must_use]
pub fn count_chars(body: &[u8]) -> u64 {
    let count = body.utf8_chunks().fold(0_usize, |total, chunk| {
        total
            .saturating_add(chunk.valid().chars().count())
            .saturating_add(chunk.invalid().len())
    });
    u64::try_from(count).unwrap_or(u64::MAX)
}

/// Number of whitespace-delimited tokens in the body.
#[must_use]
pub fn count_words(body: &[u8]) -> u64 {
    let count = String::from_utf8_lossy(body).split_whitespace().count();
    u64::try_from(count).unwrap_or(u64::MAX)
}
