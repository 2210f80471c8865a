//! sparrow-util - Core Utilities and Foundation Types
//!
//! This crate provides the small set of types shared by every phase of the
//! sparrow toolchain:
//!
//! - [`span`] - Source ranges measured in Unicode scalar values
//! - [`diagnostic`] - Diagnostic levels, codes, builder and the collecting [`Handler`]
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use sparrow_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::new("L", 6))
//!     .span(Span::new(0, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
