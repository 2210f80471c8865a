//! Identifier and keyword lexing.
//!
//! Plain identifiers, `$`-identifiers and backtick-escaped identifiers.

use crate::scanner::Position;
use crate::token::TokenKind;
use crate::unicode::{is_digit, is_identifier_body, is_identifier_head};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword. The head scalar has been consumed.
    pub(super) fn lex_identifier(&mut self, start: Position) -> TokenKind {
        self.scanner.skip_while(is_identifier_body);
        TokenKind::from_keyword(self.scanner.text(start)).unwrap_or(TokenKind::Identifier)
    }

    /// Lexes `$`, `$0`-style placeholders and `$name` identifiers. The `$`
    /// has been consumed.
    pub(super) fn lex_dollar_ident(&mut self, start: Position) -> TokenKind {
        let mut all_digits = true;

        loop {
            let c = self.scanner.peek();
            if is_digit(c) {
                self.scanner.advance();
            } else if is_identifier_body(c) || c == '$' {
                all_digits = false;
                self.scanner.advance();
            } else {
                break;
            }
        }

        // A lone `$` is an identifier of its own.
        if self.scanner.text(start).len() == 1 || !all_digits {
            TokenKind::Identifier
        } else {
            TokenKind::DollarIdent
        }
    }

    /// Lexes `` `name` `` and `` `$` ``. The opening backtick has been
    /// consumed. Anything else leaves a lone [`Backtick`](TokenKind::Backtick).
    pub(super) fn lex_escaped_identifier(&mut self, start: Position) -> TokenKind {
        let after_tick = self.scanner.current();

        if self.scanner.match_if(is_identifier_head) {
            self.scanner.skip_while(is_identifier_body);
            if self.scanner.match_char('`') {
                return TokenKind::Identifier;
            }
        }

        self.scanner.rewind(after_tick);
        if self.scanner.match_str("$`") {
            return TokenKind::Identifier;
        }

        debug_assert_eq!(self.scanner.text(start), "`");
        TokenKind::Backtick
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).collect()
    }

    fn lex_one(source: &str) -> (TokenKind, &str) {
        let token = Lexer::new(source).next_token();
        (token.kind, token.text)
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_one("foo_bar_123"), (TokenKind::Identifier, "foo_bar_123"));
        assert_eq!(lex_one("_private"), (TokenKind::Identifier, "_private"));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_one("func"), (TokenKind::Func, "func"));
        assert_eq!(lex_one("init"), (TokenKind::Init, "init"));
        assert_eq!(lex_one("_"), (TokenKind::Underscore, "_"));
        assert_eq!(lex_one("__LINE__"), (TokenKind::MagicLine, "__LINE__"));
        assert_eq!(lex_one("lets"), (TokenKind::Identifier, "lets"));
    }

    #[test]
    fn test_identifiers_are_ascii() {
        let tokens = lex_all("café");
        assert_eq!(tokens[0].text, "caf");
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].text, "é");
    }

    #[test]
    fn test_dollar_identifiers() {
        assert_eq!(lex_one("$"), (TokenKind::Identifier, "$"));
        assert_eq!(lex_one("$0"), (TokenKind::DollarIdent, "$0"));
        assert_eq!(lex_one("$12 "), (TokenKind::DollarIdent, "$12"));
        assert_eq!(lex_one("$foo"), (TokenKind::Identifier, "$foo"));
        assert_eq!(lex_one("$1a"), (TokenKind::Identifier, "$1a"));
        assert_eq!(lex_one("$a$b"), (TokenKind::Identifier, "$a$b"));
    }

    #[test]
    fn test_escaped_identifiers() {
        assert_eq!(lex_one("`class`"), (TokenKind::Identifier, "`class`"));
        assert_eq!(lex_one("`$`"), (TokenKind::Identifier, "`$`"));
        assert_eq!(lex_one("`foo"), (TokenKind::Backtick, "`"));
        assert_eq!(lex_one("``"), (TokenKind::Backtick, "`"));
    }

    #[test]
    fn test_unterminated_escape_leaves_name() {
        let kinds: Vec<_> = lex_all("`foo bar").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Backtick, TokenKind::Identifier, TokenKind::Identifier]
        );
    }
}
