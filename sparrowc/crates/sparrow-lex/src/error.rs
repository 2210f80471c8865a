//! Lexical diagnostic kinds.
//!
//! The lexer never fails: malformed input becomes an
//! [`Unknown`](crate::TokenKind::Unknown) token. When a
//! [`Handler`](sparrow_util::Handler) is attached, each malformed construct is
//! also reported as one of these kinds.

use sparrow_util::diagnostic::{DiagnosticCode, Level};
use thiserror::Error;

/// Every diagnostic the lexer can report.
///
/// # Example
///
/// ```
/// use sparrow_lex::LexErrorKind;
/// use sparrow_util::diagnostic::Level;
///
/// let kind = LexErrorKind::UnterminatedString;
/// assert_eq!(kind.to_string(), "unterminated string literal");
/// assert_eq!(kind.code().as_str(), "L0006");
/// assert_eq!(kind.level(), Level::Error);
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A scalar that cannot start any token.
    #[error("invalid character '{0}' in source file")]
    UnknownCharacter(char),

    /// A literal runs into an identifier character, as in `1a1` or `0b3`.
    #[error("'{digit}' is not a valid digit in {base} literal")]
    InvalidDigit {
        /// The offending scalar
        digit: char,
        /// Radix description such as "binary"
        base: &'static str,
    },

    /// `0x`, `0o` or `0b` with no digit after it.
    #[error("expected a digit after '{0}' prefix")]
    ExpectedDigitAfterPrefix(&'static str),

    /// `e` or `p` exponent marker with no digit.
    #[error("expected a digit in floating point exponent")]
    ExpectedExponentDigit,

    /// Hex fraction with a `p` but nothing usable after it.
    #[error("hexadecimal floating point literal must end with an exponent")]
    ExpectedHexFloatExponent,

    /// String not closed before a line break or the end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// `/*` not closed before the end of input.
    #[error("unterminated '/*' comment")]
    UnterminatedBlockComment,

    /// `\(` not closed before the end of input or the end of the line.
    #[error("unterminated string interpolation")]
    UnterminatedInterpolation,

    /// Unknown escape, or a backslash before a line break.
    #[error("invalid escape sequence in literal")]
    InvalidEscape,

    /// `\u{...}` that is malformed or not a Unicode scalar value.
    #[error("invalid unicode scalar in '\\u{{...}}' escape")]
    InvalidUnicodeEscape,

    /// A `*/` outside any block comment.
    #[error("unexpected end of block comment")]
    StrayBlockCommentEnd,

    /// A `.` with nothing usable after it.
    #[error("expected member name following '.'")]
    ExpectedMemberName,

    /// String literal written with single quotes.
    #[error("single-quoted string literal found, use '\"'")]
    SingleQuotedString,

    /// Horizontal whitespace between `.` and the member name.
    #[error("extraneous whitespace after '.' is not permitted")]
    WhitespaceAfterPeriod,

    /// `=` with whitespace on only one side.
    #[error("'=' must have consistent whitespace on both sides")]
    UnbalancedEqualSpacing,
}

impl LexErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(self) -> DiagnosticCode {
        let number = match self {
            LexErrorKind::UnknownCharacter(_) => 1,
            LexErrorKind::InvalidDigit { .. } => 2,
            LexErrorKind::ExpectedDigitAfterPrefix(_) => 3,
            LexErrorKind::ExpectedExponentDigit => 4,
            LexErrorKind::ExpectedHexFloatExponent => 5,
            LexErrorKind::UnterminatedString => 6,
            LexErrorKind::UnterminatedBlockComment => 7,
            LexErrorKind::UnterminatedInterpolation => 8,
            LexErrorKind::InvalidEscape => 9,
            LexErrorKind::InvalidUnicodeEscape => 10,
            LexErrorKind::StrayBlockCommentEnd => 11,
            LexErrorKind::ExpectedMemberName => 12,
            LexErrorKind::SingleQuotedString => 13,
            LexErrorKind::WhitespaceAfterPeriod => 14,
            LexErrorKind::UnbalancedEqualSpacing => 15,
        };
        DiagnosticCode::new("L", number)
    }

    /// Severity of this kind.
    pub fn level(self) -> Level {
        match self {
            LexErrorKind::SingleQuotedString
            | LexErrorKind::WhitespaceAfterPeriod
            | LexErrorKind::UnbalancedEqualSpacing => Level::Warning,
            _ => Level::Error,
        }
    }

    /// Fix-it style suggestion, where one applies.
    pub fn help(self) -> Option<&'static str> {
        match self {
            LexErrorKind::SingleQuotedString => Some("replace the quotes with '\"'"),
            LexErrorKind::WhitespaceAfterPeriod => Some("remove the whitespace after '.'"),
            LexErrorKind::UnbalancedEqualSpacing => {
                Some("add whitespace on the side of '=' that has none")
            },
            LexErrorKind::StrayBlockCommentEnd => Some("remove the '*/' or open a comment with '/*'"),
            _ => None,
        }
    }
}
