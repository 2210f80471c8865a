//! Error handling module for the sparrowt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the sparrowt CLI application.
#[derive(Error, Debug)]
pub enum SparrowtError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lexical errors were found by `check`.
    #[error("{0} lexical error(s) found")]
    LexicalErrors(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a TOML configuration cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using SparrowtError.
pub type Result<T> = std::result::Result<T, SparrowtError>;
