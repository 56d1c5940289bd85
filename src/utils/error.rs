//! Error handling for texspan
//!
//! Malformed user input never produces an error: unterminated delimiters fall
//! back to text and notation errors are rendered inline by the engine. The
//! only library error is an internal one, raised when the escape table and
//! its call sites disagree.

use std::fmt;

/// Render error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An escape sequence was requested that is not in the escape table
    UnknownEscape { sequence: String },
    /// IO error (for file operations in the CLI)
    IoError { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownEscape { sequence } => {
                write!(
                    f,
                    "Internal error: no sentinel registered for escape sequence {:?}",
                    sequence
                )
            }
            RenderError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

impl RenderError {
    pub fn unknown_escape(sequence: impl Into<String>) -> Self {
        RenderError::UnknownEscape {
            sequence: sequence.into(),
        }
    }

    /// True for errors that indicate a bug rather than bad input or IO.
    pub fn is_internal(&self) -> bool {
        matches!(self, RenderError::UnknownEscape { .. })
    }
}
