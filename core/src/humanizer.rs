//! # Humanizer
//!
//! The public entry point: validates a monetary amount and assembles the
//! sentence written on a cheque, e.g. `"2523.04"` becomes
//! `"two thousand five hundred twenty-three and 04/100 dollars"`.

use checkwords_common::config::Config;
use checkwords_common::error::ConversionResult;
use checkwords_common::money::NOT_US_CURRENCY_FORMAT;
use checkwords_common::money::amount::Amount;
use tracing::{error, warn};

use crate::converter::group;

const ZERO: &str = "zero";

/// The result of humanizing a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    /// False when `output` is the format diagnostic.
    pub valid: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Humanizer {
    zero_words: bool,
}

impl Default for Humanizer {
    fn default() -> Self {
        Self { zero_words: true }
    }
}

impl Humanizer {
    pub fn new(config: &Config) -> Self {
        Self {
            zero_words: config.zero_words,
        }
    }

    /// Reproduces the historical rendering of all-zero dollar parts, where
    /// `"0.00"` becomes `" dollars"`.
    pub fn legacy() -> Self {
        Self { zero_words: false }
    }

    /// Humanizes `amount`, or returns [`NOT_US_CURRENCY_FORMAT`] verbatim when
    /// it is not of the form `^[0-9]{1,12}\.[0-9]{2}$`.
    pub fn humanize(&self, amount: &str) -> String {
        self.convert(amount).output
    }

    /// Like [`Humanizer::humanize`] but keeps the typed error.
    pub fn try_humanize(&self, amount: &str) -> ConversionResult<String> {
        let amount: Amount = amount.parse()?;
        self.render(&amount)
    }

    pub fn render(&self, amount: &Amount) -> ConversionResult<String> {
        let mut words = group::convert(amount.dollars())?;
        if words.is_empty() && self.zero_words {
            words.push_str(ZERO);
        }
        if let Some(cents) = cents_clause(amount.cents()) {
            words.push_str(&cents);
        }
        words.push_str(" dollars");
        Ok(words)
    }

    /// Humanizes `input` and records whether it was accepted.
    pub fn convert(&self, input: &str) -> Conversion {
        let (output, valid) = match self.try_humanize(input) {
            Ok(words) => (words, true),
            Err(e) => {
                if e.is_user_error() {
                    warn!("Rejected amount {input:?}: {e}");
                } else {
                    error!("Converter failed on validated amount {input:?}: {e}");
                }
                (NOT_US_CURRENCY_FORMAT.to_string(), false)
            }
        };

        Conversion {
            input: input.to_string(),
            output,
            valid,
        }
    }
}

/// `" and DD/100"`, or nothing for zero cents.
pub fn cents_clause(cents: u8) -> Option<String> {
    (cents != 0).then(|| format!(" and {cents:02}/100"))
}
