//! Error types for the console front end
//!
//! Covers terminal I/O, settings loading and command parsing. Move rejections
//! are not errors here; they come back from the engine as outcomes.

use thiserror::Error;

/// Errors that can occur in the console front end
#[derive(Error, Debug)]
pub enum CoreError {
    /// Terminal or settings file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings or output serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input line that is not a known command
    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidCommand {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for console operations
pub type CoreResult<T> = Result<T, CoreError>;
