//! # Monetary Amount Model
//!
//! Defines the only input the converters accept: a non-negative dollar amount
//! written with one to twelve integer digits, a decimal point and exactly two
//! cent digits (e.g. `2523.04`).
//!
//! Validation happens once, here. Everything downstream can rely on the
//! integer part being ASCII digits only and at most twelve of them long.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConversionError;

/// Longest integer part accepted, which keeps every amount below one trillion.
pub const MAX_DOLLAR_DIGITS: usize = 12;

// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII digits.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,12})\.([0-9]{2})$").expect("valid amount regex pattern")
});

/// A validated amount of dollars and cents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Amount {
    dollars: String,
    cents: u8,
}

impl Amount {
    /// The integer part exactly as written, leading zeros included.
    pub fn dollars(&self) -> &str {
        &self.dollars
    }

    pub fn cents(&self) -> u8 {
        self.cents
    }

    /// True when every digit of the integer part is `0` (`"0"`, `"000"`, ...).
    pub fn is_zero_dollars(&self) -> bool {
        self.dollars.bytes().all(|b| b == b'0')
    }
}

impl FromStr for Amount {
    type Err = ConversionError;

    /// Parses `^[0-9]{1,12}\.[0-9]{2}$`.
    ///
    /// No trimming, rounding or sign handling is done: the input must already
    /// be canonical.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || ConversionError::Format {
            input: s.to_string(),
        };

        let captures = AMOUNT_PATTERN.captures(s).ok_or_else(format_error)?;
        let dollars = captures.get(1).ok_or_else(format_error)?.as_str();
        let cents = captures
            .get(2)
            .ok_or_else(format_error)?
            .as_str()
            .parse::<u8>()
            .map_err(|_| format_error())?;

        Ok(Self {
            dollars: dollars.to_string(),
            cents,
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}
