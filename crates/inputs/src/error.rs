//! Error types for the inputs crate.
//!
//! Every way a student's input can be malformed maps to one variant here.
//! Validation happens once, when a `StudentInput` is built, so the scoring
//! code downstream never has to deal with bad values.

use thiserror::Error;

/// Errors that can occur while parsing or validating engine input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Clock string was not a valid 24h `HH:MM` time
    #[error("Invalid clock time '{value}': {reason}")]
    InvalidClock { value: String, reason: String },

    /// Quiz answer was not one of the four allowed scores
    #[error("Invalid quiz answer '{value}' (expected one of 0, 33, 67, 100 or none, some, most, all)")]
    InvalidQuizAnswer { value: String },

    /// Wrong number of quiz answers
    #[error("Expected {expected} quiz answers but found {found}")]
    QuizCountMismatch { expected: usize, found: usize },

    /// A numeric field was NaN or infinite
    #[error("Value for {field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A numeric field was outside its allowed range
    #[error("Value for {field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A numeric field that cannot be negative was negative
    #[error("Value for {field} cannot be negative: {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, InputError>;
