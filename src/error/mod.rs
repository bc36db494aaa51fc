//! Error types for utilbelt
//!
//! Most helpers in this crate are lenient and never fail: they fall back to
//! `false`, `0` or an empty string. The strict counterparts (`parse_int`,
//! `decode_base64`, `try_uuid`, `delete`, `random_element`, ...) report
//! failures through [`UtilBeltError`].

use thiserror::Error;

/// Main error type for utilbelt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilBeltError {
    // Sequence errors

    /// The operation needs at least one element
    #[error("Empty input")]
    EmptyInput,

    /// Index is past the end of the sequence
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the sequence at the time of the call
        len: usize,
    },

    // Parse errors

    /// String is not a valid number for the requested type
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// String is not valid standard base64
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// Decoded bytes are not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(String),

    // Randomness errors

    /// The entropy source could not fill the buffer
    #[error("Entropy source failure: {0}")]
    Entropy(String),

    /// Lower bound is not strictly below the upper bound
    #[error("Invalid range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Inclusive lower bound
        min: i64,
        /// Exclusive upper bound
        max: i64,
    },
}

/// Type alias for Results using UtilBeltError
pub type Result<T> = std::result::Result<T, UtilBeltError>;

impl UtilBeltError {
    /// Check if this error came from the entropy source
    pub const fn is_entropy_error(&self) -> bool {
        matches!(self, Self::Entropy(_))
    }
}

impl From<std::num::ParseIntError> for UtilBeltError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::InvalidNumber(error.to_string())
    }
}

impl From<base64::DecodeError> for UtilBeltError {
    fn from(error: base64::DecodeError) -> Self {
        Self::InvalidBase64(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for UtilBeltError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Utf8(error.to_string())
    }
}
