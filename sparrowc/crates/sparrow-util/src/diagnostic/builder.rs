//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Fluent constructor for [`Diagnostic`] values.
///
/// # Examples
///
/// ```
/// use sparrow_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Level};
/// use sparrow_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::warning("extraneous whitespace after '.'")
///     .code(DiagnosticCode::new("L", 14))
///     .span(Span::new(1, 2))
///     .help("remove the whitespace")
///     .emit(&handler);
///
/// assert_eq!(handler.diagnostics()[0].level, Level::Warning);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic of the given level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Start an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building without emitting.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("boom").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_builder_full() {
        let diag = DiagnosticBuilder::warning("careful")
            .code(DiagnosticCode::new("L", 13))
            .span(Span::new(2, 3))
            .help("a help")
            .build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, Some(DiagnosticCode::new("L", 13)));
        assert_eq!(diag.span, Span::new(2, 3));
        assert_eq!(diag.helps, vec!["a help"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("x").emit(&handler);
        assert_eq!(handler.error_count(), 1);
    }
}
