//! Edge case tests for sparrow-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};
    use sparrow_util::{Handler, Span};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].span, Span::new(0, 1));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text.len(), 10000);
    }

    #[test]
    fn test_edge_deep_comment_nesting() {
        let source = format!("{}x{}y", "/*".repeat(500), "*/".repeat(500));
        assert_eq!(kinds(&source), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_much_trivia_between_tokens() {
        let source = format!("a{}b", " // c\n /* d */".repeat(5000));
        assert_eq!(kinds(&source), vec![TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_lone_quote() {
        assert_eq!(kinds("\""), vec![TokenKind::Unknown]);
        assert_eq!(kinds("'"), vec![TokenKind::Unknown]);
    }

    #[test]
    fn test_edge_lone_backslash_and_backtick() {
        assert_eq!(kinds("\\"), vec![TokenKind::Backslash]);
        assert_eq!(kinds("`"), vec![TokenKind::Backtick]);
    }

    #[test]
    fn test_edge_key_path_backslash() {
        assert_eq!(
            kinds("\\Point.x"),
            vec![
                TokenKind::Backslash,
                TokenKind::Identifier,
                TokenKind::Period,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_nul_scalar_in_source() {
        let t = lex_all("a\0+b");
        assert_eq!(t[1].kind, TokenKind::Unknown);
        // A NUL before an operator unbinds it like whitespace.
        assert_eq!(t[2].kind, TokenKind::OperPrefix);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\rc");
        assert!(t.iter().all(|t| t.is_first_in_line));
    }

    #[test]
    fn test_edge_vertical_tab_and_form_feed() {
        assert_eq!(kinds("a\u{b}\u{c}b"), vec![TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_non_ascii_whitespace_is_unknown() {
        assert_eq!(
            kinds("a\u{a0}b"),
            vec![TokenKind::Identifier, TokenKind::Unknown, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_operator_at_end() {
        assert_eq!(kinds("x++"), vec![TokenKind::Identifier, TokenKind::OperPostfix]);
    }

    #[test]
    fn test_edge_dot_run() {
        let t = lex_all("a...b");
        assert_eq!(t[1].text, "...");
        assert_eq!(t[1].kind, TokenKind::OperBinaryUnspaced);
    }

    #[test]
    fn test_edge_number_then_range() {
        let t = lex_all("1...5");
        assert_eq!(t[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(t[1].text, "...");
        assert_eq!(t[2].kind, TokenKind::IntegerLiteral);
    }

    #[test]
    fn test_edge_string_then_member() {
        assert_eq!(
            kinds("\"a\".count"),
            vec![TokenKind::StringLiteral, TokenKind::Period, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_keyword_as_escaped_identifier() {
        let t = lex_all("let `let` = 1");
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[1].text, "`let`");
    }

    #[test]
    fn test_edge_tokenize_ends_with_eof() {
        let tokens = tokenize("a b");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(3)));
    }

    #[test]
    fn test_edge_errors_are_independent() {
        let handler = Handler::new();
        let source = "0b9\n\"open\n1e\n.\n*/";
        let kinds: Vec<_> = Lexer::with_handler(source, &handler).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Period,
                TokenKind::Unknown,
            ]
        );
        assert_eq!(handler.error_count(), 4);
    }

    #[test]
    fn test_edge_position_advances() {
        let mut lexer = Lexer::new("ab cd");
        assert_eq!(lexer.position(), 0);
        lexer.next_token();
        assert_eq!(lexer.position(), 2);
        lexer.next_token();
        assert_eq!(lexer.position(), 5);
        assert_eq!(lexer.source(), "ab cd");
    }
}
