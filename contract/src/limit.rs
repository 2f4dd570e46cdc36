//! Limit parsing and validation for the input form.
//!
//! Parsing takes the integer prefix of the input: leading whitespace is
//! skipped, one optional sign is accepted, then the longest run of ASCII
//! digits. Anything after the digits is ignored, so `"3.9"` reads as 3 and
//! `"1e3"` as 1.

#[cfg(test)]
#[path = "limit_test.rs"]
mod limit_test;

use crate::error::SubmitError;

/// Smallest limit the form will dispatch.
pub const MIN_LIMIT: u64 = 2;

/// Parse raw form text into a validated limit.
///
/// # Errors
///
/// Returns [`SubmitError::InvalidInput`] when the text has no integer prefix,
/// the value is negative or below [`MIN_LIMIT`], or it does not fit in `u64`.
pub fn parse_limit(raw: &str) -> Result<u64, SubmitError> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(SubmitError::InvalidInput);
    }
    if negative {
        return Err(SubmitError::InvalidInput);
    }
    let value: u64 = rest[..digits_len].parse().map_err(|_| SubmitError::InvalidInput)?;
    if value < MIN_LIMIT {
        return Err(SubmitError::InvalidInput);
    }
    Ok(value)
}
