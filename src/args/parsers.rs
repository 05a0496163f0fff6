use std::time::Duration;

use super::types::{PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn parse_header(s: &str) -> Result<(String, String), ValidationError> {
    match s.split_once(':') {
        Some((key, value)) => Ok((key.trim().to_owned(), value.trim().to_owned())),
        None => Err(ValidationError::InvalidHeaderFormat {
            value: s.to_owned(),
        }),
    }
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            }));
        }
    };

    if duration.as_millis() == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(duration)
}

/// Parses a byte count such as `5242880`, `512K`, `5M` or `1G` (binary units).
pub(crate) fn parse_size_arg(s: &str) -> AppResult<PositiveU64> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::SizeEmpty));
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(AppError::validation(ValidationError::InvalidSizeFormat {
            value: value.to_owned(),
        }));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|_err: std::num::ParseIntError| {
        AppError::validation(ValidationError::SizeOverflow {
            value: value.to_owned(),
        })
    })?;

    let multiplier: u64 = match unit_part.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" | "KIB" => 1024,
        "M" | "MB" | "MIB" => 1024 * 1024,
        "G" | "GB" | "GIB" => 1024 * 1024 * 1024,
        _ => {
            return Err(AppError::validation(ValidationError::InvalidSizeFormat {
                value: value.to_owned(),
            }));
        }
    };
    let bytes = number.checked_mul(multiplier).ok_or_else(|| {
        AppError::validation(ValidationError::SizeOverflow {
            value: value.to_owned(),
        })
    })?;

    PositiveU64::try_from(bytes).map_err(|_err| AppError::validation(ValidationError::SizeZero))
}
