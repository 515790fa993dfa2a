//! Error types for prism-obj
//!
//! Writing text into a document never fails. Errors come from handing the
//! finished text to a sink, or from mesh sources with invalid topology.

use std::io;
use thiserror::Error;

/// Main error type for prism-obj operations
#[derive(Debug, Error)]
pub enum ObjError {
    /// IO error occurred while writing to a file or stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The output path cannot be used as an obj destination
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    /// A mesh source references data it does not have
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for prism-obj operations
pub type Result<T> = std::result::Result<T, ObjError>;

impl From<String> for ObjError {
    fn from(s: String) -> Self {
        ObjError::Custom(s)
    }
}

impl From<&str> for ObjError {
    fn from(s: &str) -> Self {
        ObjError::Custom(s.to_string())
    }
}
