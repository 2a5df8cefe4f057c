//! Error types for ansicolor.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ansicolor operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Escape sequence whose parameter list contains a non-integer token
    #[error("Malformed escape sequence {sequence:?}: {segment:?} is not an integer")]
    MalformedSequence {
        /// Full sequence text, `ESC [` through `m`
        sequence: String,
        /// The offending segment
        segment: String,
    },

    /// Failure while processing a single document
    #[error("Failed to process {}: {source}", .path.display())]
    Document {
        /// Path of the document
        path: PathBuf,
        /// Underlying error
        source: Box<Error>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input or parameters (generic)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Attach a document path to this error.
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        Error::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Returns true if this error (or the error it wraps) is a malformed sequence.
    pub fn is_malformed_sequence(&self) -> bool {
        match self {
            Error::MalformedSequence { .. } => true,
            Error::Document { source, .. } => source.is_malformed_sequence(),
            _ => false,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
