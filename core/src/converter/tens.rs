use checkwords_common::error::{ConversionError, ConversionResult};
use tracing::trace;

use super::ones;

pub const MAX: u64 = 99;

/// Indexed by the tens digit; 0 and 1 are handled by [`ones`].
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Renders 0..=99, hyphenating compound values ("twenty-three").
pub fn convert(n: u64) -> ConversionResult<String> {
    let words = match n {
        0..=ones::MAX => ones::convert(n)?.to_string(),
        20..=MAX => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{tens}-{}", ones::convert(unit)?),
            }
        }
        _ => return Err(ConversionError::InvalidDigit { value: n, max: MAX }),
    };

    trace!(n, words = %words, "tens");
    Ok(words)
}
