use checkwords_common::error::{ConversionError, ConversionResult};
use tracing::trace;

pub const MAX: u64 = 19;

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

/// Renders 0..=19 as a single cardinal word. Zero renders as `""`.
pub fn convert(n: u64) -> ConversionResult<&'static str> {
    let word = usize::try_from(n)
        .ok()
        .and_then(|index| ONES.get(index).copied())
        .ok_or(ConversionError::InvalidDigit { value: n, max: MAX })?;

    trace!(n, word, "ones");
    Ok(word)
}
