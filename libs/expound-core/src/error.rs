//! Error types for expound-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur at the core's input boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("score {value} out of range, expected 1-5")]
    InvalidScore { value: u8 },
}
