//! Renders digit strings of any length by splitting them into three-digit
//! groups from the right and naming each group's scale.

use checkwords_common::error::{ConversionError, ConversionResult};
use tracing::debug;

use super::hundreds;

const GROUP_WIDTH: usize = 3;

/// Scale words keyed by the power of ten of the group they follow.
///
/// Extending the supported range only needs a new entry here.
const SCALE_WORDS: [(usize, &str); 3] = [(3, "thousand"), (6, "million"), (9, "billion")];

fn scale_word(scale: usize) -> Option<&'static str> {
    SCALE_WORDS
        .iter()
        .find(|(exponent, _)| *exponent == scale)
        .map(|(_, word)| *word)
}

fn group_value(group: &[u8]) -> u64 {
    group
        .iter()
        .fold(0, |value, digit| value * 10 + u64::from(digit - b'0'))
}

/// Converts a string of ASCII digits into words.
///
/// Groups are emitted from the most significant down, each followed by its
/// scale word. All-zero groups are skipped together with their scale word, so
/// leading zeros never change the output and `"0"` renders as `""`.
///
/// Fails with [`ConversionError::UnsupportedMagnitude`] when a non-zero group
/// sits above the billions.
pub fn convert(digits: &str) -> ConversionResult<String> {
    if digits.is_empty() {
        return Err(ConversionError::EmptyGroup);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::NonDigit {
            input: digits.to_string(),
        });
    }

    let mut rendered: Vec<String> = Vec::new();

    for (position, group) in digits.as_bytes().rchunks(GROUP_WIDTH).enumerate().rev() {
        let words = hundreds::convert(group_value(group))?;
        if words.is_empty() {
            continue;
        }

        let scale = position * GROUP_WIDTH;
        let words = if scale == 0 {
            words
        } else {
            let scale_word = scale_word(scale).ok_or(ConversionError::UnsupportedMagnitude {
                digits: digits.len(),
            })?;
            format!("{words} {scale_word}")
        };

        debug!(scale, group = %words, "rendered digit group");
        rendered.push(words);
    }

    Ok(rendered.join(" "))
}
