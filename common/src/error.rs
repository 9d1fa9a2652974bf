use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A value outside the range a tier converter accepts.
    #[error("digit value {value} is out of range (expected 0..={max})")]
    InvalidDigit { value: u64, max: u64 },

    #[error("digit group '{input}' contains a non-digit character")]
    NonDigit { input: String },

    #[error("cannot convert an empty digit group")]
    EmptyGroup,

    /// More digits than the scale table has words for.
    #[error("{digits} digits exceed the largest supported scale (billions)")]
    UnsupportedMagnitude { digits: usize },

    #[error("'{input}' is not in US currency format")]
    Format { input: String },
}

impl ConversionError {
    /// True for failures caused by the caller's input, as opposed to a bug
    /// in how the converters were driven.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ConversionError::Format { .. })
    }
}
