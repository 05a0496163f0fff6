use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid header format: '{value}'. Expected 'Key: Value'")]
    InvalidHeaderFormat { value: String },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Size must not be empty.")]
    SizeEmpty,
    #[error("Invalid size '{value}'. Use a byte count with an optional K/M/G suffix.")]
    InvalidSizeFormat { value: String },
    #[error("Size overflow in '{value}'.")]
    SizeOverflow { value: String },
    #[error("Size must be > 0.")]
    SizeZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Missing URL (set -u/--url or provide in config).")]
    MissingUrl,
    #[error("Missing wordlist (set -w/--wordlist or provide in config).")]
    MissingWordlist,
    #[error("Failed to read wordlist '{path}': {source}")]
    ReadWordlist {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Wordlist '{path}' has no entries.")]
    EmptyWordlist { path: String },
    #[error("Keyword must not be empty.")]
    EmptyKeyword,
    #[error(
        "Keyword '{keyword}' was not found in the URL, headers, or body; nothing would be fuzzed."
    )]
    KeywordNotUsed { keyword: String },
    #[error("`--output-format` requires `--output`.")]
    OutputFormatRequiresOutput,
    #[error("Run cancelled.")]
    RunCancelled,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
