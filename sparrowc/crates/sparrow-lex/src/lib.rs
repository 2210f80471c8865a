//! sparrow-lex - Lexical Analyzer for the Sparrow Programming Language
//!
//! This crate turns sparrow source text into a flat sequence of classified
//! tokens for a parser to consume. Sparrow is a Swift-like language, so most
//! of the work is resolving context-sensitive spellings: whether `.` is
//! member access or a prefix, whether `#foo` is a directive, whether
//! `0xA.fp` is a hex float or an integer followed by a member.
//!
//! # Example Usage
//!
//! ```
//! use sparrow_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = a.0.1");
//!
//! // Pull tokens one at a time until `Eof`...
//! let first = lexer.next_token();
//! assert_eq!(first.kind, TokenKind::Let);
//!
//! // ...or iterate over the rest.
//! let kinds: Vec<_> = lexer.map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::Identifier,
//!     TokenKind::Equal,
//!     TokenKind::Identifier,
//!     TokenKind::Period,
//!     TokenKind::IntegerLiteral,
//!     TokenKind::Period,
//!     TokenKind::IntegerLiteral,
//! ]);
//! ```
//!
//! # Module Structure
//!
//! - [`unicode`] - Scalar classification table and predicates
//! - [`scanner`] - Copyable cursor with lookahead and rewind
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The lexer state machine and scan routines
//! - [`error`] - Diagnostic kinds reported through a handler
//!
//! # Errors
//!
//! Lexing never fails. Malformed input becomes a
//! [`TokenKind::Unknown`] token and lexing carries on after it. To learn
//! *why* a token is unknown, attach a [`sparrow_util::Handler`] with
//! [`Lexer::with_handler`].
//!
//! # Trivia
//!
//! Whitespace and comments are skipped by default. With
//! [`Lexer::retain_trivia`] they come back as tokens, and the token texts
//! then concatenate to the original source.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use error::LexErrorKind;
pub use lexer::Lexer;
pub use scanner::{Position, Scanner};
pub use token::{Token, TokenKind};

/// Lexes all of `source`, including the final [`TokenKind::Eof`] token.
///
/// ```
/// use sparrow_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("#if DEBUG\n#endif");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].kind, TokenKind::PoundIf);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert!(tokens[0].is_first_in_line);
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \n\t  \n  ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_comments_only() {
        let tokens = tokenize("// comment\n/* block */\n// another");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_struct_declaration() {
        let source = r#"
            public struct Point {
                var x: Double = 0.0
                static let origin = Point()
            }
        "#;
        let kinds: Vec<_> = tokenize(source).iter().map(|t| t.kind).collect();

        assert!(kinds.contains(&TokenKind::Public));
        assert!(kinds.contains(&TokenKind::Struct));
        assert!(kinds.contains(&TokenKind::Var));
        assert!(kinds.contains(&TokenKind::Static));
        assert!(kinds.contains(&TokenKind::FloatingLiteral));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Equal).count(), 2);
    }

    #[test]
    fn test_first_token_on_each_line() {
        let source = "let a = 1\nlet b = a\n  .description";
        let firsts: Vec<_> = tokenize(source)
            .into_iter()
            .filter(|t| t.is_first_in_line && !t.is_eof())
            .map(|t| t.text)
            .collect();
        assert_eq!(firsts, vec!["let", "let", "."]);
    }

    #[test]
    fn test_control_flow() {
        let source = "guard let v = opt else { return nil }\nfor i in 0..<n where i != 2 {}";
        let kinds: Vec<_> = tokenize(source).iter().map(|t| t.kind).collect();

        assert!(kinds.contains(&TokenKind::Guard));
        assert!(kinds.contains(&TokenKind::Nil));
        assert!(kinds.contains(&TokenKind::For));
        assert!(kinds.contains(&TokenKind::In));
        assert!(kinds.contains(&TokenKind::Where));
        assert!(kinds.contains(&TokenKind::OperBinaryUnspaced));
    }
}
