//! Error types for the hansard library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hansard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or extracting a Hansard.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input violates the page-break conventions of the format.
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based physical line index in the input
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The extractor revisited a single line more often than allowed.
    #[error("Line {line} was reprocessed more than {limit} times")]
    TransitionLimit {
        /// Overall line number of the line being processed
        line: usize,
        /// The configured limit
        limit: usize,
    },

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a malformed-input error for the given physical line.
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed(12, "page break after content");
        assert_eq!(
            err.to_string(),
            "Malformed input at line 12: page break after content"
        );

        let err = Error::TransitionLimit { line: 7, limit: 16 };
        assert_eq!(err.to_string(), "Line 7 was reprocessed more than 16 times");

        let err = Error::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "Input not found: missing.txt");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
