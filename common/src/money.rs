pub mod amount;

/// Diagnostic returned in place of words when an amount fails validation.
pub const NOT_US_CURRENCY_FORMAT: &str = "Not in US currency format";
