//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Line and nested block comments
//! - `directive` - `#` directives and the hashbang line
//! - `identifier` - Identifier, `$`-identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Operator lexing and left/right binding
//! - `string` - String literal lexing
//! - `interpolation` - Balancing `\( ... )` segments inside strings

mod comment;
mod core;
mod directive;
mod identifier;
mod interpolation;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;

#[cfg(test)]
mod tests {
    use super::Lexer;
    use crate::{Token, TokenKind};
    use proptest::prelude::*;

    fn lex_with_trivia(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).retain_trivia(true).collect()
    }

    #[test]
    fn test_small_program() {
        let source = "func add(_ a: Int, _ b: Int) -> Int {\n    return a + b\n}\n";
        let kinds: Vec<_> = Lexer::new(source).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Func,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Underscore,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Underscore,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Arrow,
                TokenKind::Identifier,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::OperBinarySpaced,
                TokenKind::Identifier,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_optional_chaining() {
        let kinds: Vec<_> = Lexer::new("a?.b!.c").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::QuestionPostfix,
                TokenKind::Period,
                TokenKind::Identifier,
                TokenKind::ExclaimPostfix,
                TokenKind::Period,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_errors_do_not_stop_lexing() {
        let kinds: Vec<_> = Lexer::new("0b2 \"x\\q\" */ y").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_property_lexing_terminates() {
        proptest!(|(input in any::<String>())| {
            let mut lexer = Lexer::new(&input);
            let limit = input.chars().count() + 1;
            let mut calls = 0;
            while !lexer.next_token().is_eof() {
                calls += 1;
                prop_assert!(calls <= limit, "no eof after {} tokens", calls);
            }
        });
    }

    #[test]
    fn test_property_eof_is_stable() {
        proptest!(|(input in "[ -~\n\t]{0,64}")| {
            let mut lexer = Lexer::new(&input);
            while !lexer.next_token().is_eof() {}
            for _ in 0..3 {
                let token = lexer.next_token();
                prop_assert_eq!(token.kind, TokenKind::Eof);
                prop_assert_eq!(token.text, "");
            }
        });
    }

    #[test]
    fn test_property_trivia_round_trip() {
        proptest!(|(input in any::<String>())| {
            let rebuilt: String = lex_with_trivia(&input).iter().map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, input);
        });
    }

    #[test]
    fn test_property_round_trip_on_code_like_input() {
        proptest!(|(input in r#"[a-z0-9_.+\-*/%<>=!?&|^~()\[\]{},;:@#$`"'\\ \n\t]{0,80}"#)| {
            let tokens = lex_with_trivia(&input);
            let rebuilt: String = tokens.iter().map(|t| t.text).collect();
            prop_assert_eq!(&rebuilt, &input);

            // Spans tile the input in scalar indices.
            let mut next = 0;
            for token in &tokens {
                prop_assert_eq!(token.span.start, next);
                prop_assert_eq!(token.span.len(), token.text.chars().count());
                next = token.span.end;
            }
            prop_assert_eq!(next, input.chars().count());
        });
    }

    #[test]
    fn test_property_skipping_trivia_keeps_real_tokens() {
        proptest!(|(input in r#"[a-z0-9.+\-/* \n"]{0,60}"#)| {
            let with: Vec<_> = lex_with_trivia(&input)
                .into_iter()
                .filter(|t| !t.is_trivia())
                .collect();
            let without: Vec<_> = Lexer::new(&input).collect();
            prop_assert_eq!(with, without);
        });
    }
}
