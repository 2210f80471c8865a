//! Core error types for sparrow-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// A diagnostic code did not have the `{prefix}{number}` shape
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),

    /// A diagnostic code used a prefix no phase defines
    #[error("Unknown diagnostic prefix `{prefix}` in code {code}")]
    UnknownPrefix {
        /// The offending prefix
        prefix: String,
        /// The full code as written
        code: String,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
