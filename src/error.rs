//! Error types for Swatchbook.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Swatchbook operations.
pub type Result<T> = std::result::Result<T, SwatchError>;

/// Errors that can occur in Swatchbook.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// Start color is not one of the known hue names.
    #[error("Unknown hue name: {name}")]
    UnknownHueName { name: String },

    /// Input that should have been a number.
    #[error("Invalid number: {input}")]
    InvalidNumber { input: String },

    /// Date label input without a usable month.
    #[error("Invalid date: {input}")]
    InvalidDate { input: String },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SwatchError {
    /// Create an UnknownHueName error.
    pub fn unknown_hue(name: impl Into<String>) -> Self {
        Self::UnknownHueName { name: name.into() }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Create an InvalidDate error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_hue_message_names_the_input() {
        let err = SwatchError::unknown_hue("chartreuse");
        assert_eq!(err.to_string(), "Unknown hue name: chartreuse");
        assert!(matches!(err, SwatchError::UnknownHueName { ref name } if name == "chartreuse"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SwatchError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
