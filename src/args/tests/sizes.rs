use super::*;

#[test]
fn parse_size_suffixes() -> AppResult<()> {
    let cases = [
        ("5242880", 5_242_880_u64),
        ("5M", 5_242_880),
        ("512k", 524_288),
        ("1GiB", 1_073_741_824),
        ("10B", 10),
    ];
    for (input, expected) in cases {
        let parsed = parse_size_arg(input)?;
        if parsed.get() != expected {
            return Err(AppError::validation(format!(
                "Unexpected size for {}: {}",
                input,
                parsed.get()
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_size_rejects_garbage() -> AppResult<()> {
    for input in ["", "M", "12Q", "0", "99999999999999999999"] {
        if parse_size_arg(input).is_ok() {
            return Err(AppError::validation(format!(
                "Expected '{}' to be rejected",
                input
            )));
        }
    }
    Ok(())
}
