//! Error types for the docsearch library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`DocSearchError`] enum. Construction failures (a document that cannot
//! be read) and configuration failures (an unrecognized search mode)
//! surface here; malformed query terms do not — they are a defined
//! zero-result case handled by the search engine.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for docsearch operations.
#[derive(Error, Debug)]
pub enum DocSearchError {
    /// I/O errors (file operations, terminal I/O).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A source document could not be read; the whole load aborts.
    #[error("Load error: {0}")]
    Load(String),

    /// Caller misconfiguration, e.g. an unrecognized search mode.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Text-analysis errors (pattern compilation).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`DocSearchError`].
pub type Result<T> = std::result::Result<T, DocSearchError>;

impl DocSearchError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        DocSearchError::Load(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DocSearchError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DocSearchError::Analysis(msg.into())
    }
}
