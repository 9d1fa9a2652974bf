use checkwords_common::error::{ConversionError, ConversionResult};
use tracing::trace;

use super::{ones, tens};

pub const MAX: u64 = 999;

/// Renders one three-digit group, 0..=999.
///
/// The hundreds digit becomes "<word> hundred" and the last two digits are
/// handed to [`tens`]; either part is left out when it is zero.
pub fn convert(n: u64) -> ConversionResult<String> {
    if n > MAX {
        return Err(ConversionError::InvalidDigit { value: n, max: MAX });
    }

    let mut parts: Vec<String> = Vec::with_capacity(2);

    let hundreds_digit = n / 100;
    if hundreds_digit > 0 {
        parts.push(format!("{} hundred", ones::convert(hundreds_digit)?));
    }

    let remainder = n % 100;
    if remainder > 0 {
        parts.push(tens::convert(remainder)?);
    }

    let words = parts.join(" ");
    trace!(n, words = %words, "hundreds");
    Ok(words)
}
