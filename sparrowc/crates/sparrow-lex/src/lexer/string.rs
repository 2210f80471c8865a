//! String literal lexing.
//!
//! The token text is the literal exactly as written, quotes and escapes
//! included. Escapes are validated here but never decoded.

use super::interpolation::skip_to_end_of_interpolation;
use crate::error::LexErrorKind;
use crate::scanner::Position;
use crate::token::TokenKind;
use crate::unicode::{
    is_alphanumeric, is_hex_digit, is_line_break, is_valid_scalar, parse_hex_codepoint,
};
use crate::Lexer;

/// Outcome of reading one logical character of a string body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StringChar {
    /// Ordinary scalar or well-formed escape.
    Valid,
    /// Malformed escape, already reported.
    Invalid,
    /// The quote that opened the literal.
    Closing,
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal. The opening `quote` has been consumed.
    ///
    /// `"""` opens a multiline literal that may contain line breaks and ends
    /// at the next `"""`. Any malformed escape, interpolation or missing
    /// closing quote turns the whole literal into one
    /// [`Unknown`](TokenKind::Unknown) token.
    pub(super) fn lex_string(&mut self, start: Position, quote: char) -> TokenKind {
        let multiline = quote == '"' && self.scanner.match_str("\"\"");
        let mut erroneous = false;

        loop {
            if self.scanner.peek() == '\\' && self.scanner.peek_next() == '(' {
                let segment = self.scanner.current();
                self.scanner.advance();
                self.scanner.advance();

                match skip_to_end_of_interpolation(self.scanner, multiline) {
                    Ok(close_paren) => {
                        self.scanner.rewind(close_paren);
                        self.scanner.advance();
                    },
                    Err(stop) => {
                        self.report_span(LexErrorKind::UnterminatedInterpolation, segment, stop);
                        self.scanner.rewind(stop);
                        erroneous = true;
                    },
                }
                continue;
            }

            if self.scanner.is_at_end() || (!multiline && is_line_break(self.scanner.peek())) {
                self.report(LexErrorKind::UnterminatedString, start);
                return TokenKind::Unknown;
            }

            match self.lex_string_char(quote, multiline) {
                StringChar::Closing if !multiline || self.scanner.match_str("\"\"") => break,
                StringChar::Invalid => erroneous = true,
                _ => {},
            }
        }

        if quote == '\'' {
            self.report(LexErrorKind::SingleQuotedString, start);
        }

        if erroneous {
            TokenKind::Unknown
        } else {
            TokenKind::StringLiteral
        }
    }

    /// Reads one scalar or escape sequence of a string body.
    fn lex_string_char(&mut self, quote: char, multiline: bool) -> StringChar {
        let char_start = self.scanner.current();

        match self.scanner.advance() {
            '\\' => {},
            c if c == quote => return StringChar::Closing,
            _ => return StringChar::Valid,
        }

        match self.scanner.peek() {
            '0' | 'n' | 'r' | 't' | '"' | '\'' | '\\' => {
                self.scanner.advance();
                StringChar::Valid
            },
            'u' => {
                self.scanner.advance();
                self.lex_unicode_escape(char_start)
            },
            ' ' | '\t' | '\n' | '\r' if multiline && self.skip_escaped_newline() => {
                StringChar::Valid
            },
            c => {
                // Consume a plausible escape letter so `\q` reports once.
                if is_alphanumeric(c) {
                    self.scanner.advance();
                }
                self.report(LexErrorKind::InvalidEscape, char_start);
                StringChar::Invalid
            },
        }
    }

    /// Lexes `{HEX}` after `\u`, with one to eight hex digits naming a
    /// Unicode scalar value.
    fn lex_unicode_escape(&mut self, char_start: Position) -> StringChar {
        if !self.scanner.match_char('{') {
            self.report(LexErrorKind::InvalidUnicodeEscape, char_start);
            return StringChar::Invalid;
        }

        let digits_start = self.scanner.current();
        self.scanner.skip_while(is_hex_digit);
        let digits = self.scanner.text(digits_start);

        if !self.scanner.match_char('}') {
            self.report(LexErrorKind::InvalidUnicodeEscape, char_start);
            return StringChar::Invalid;
        }

        match parse_hex_codepoint(digits) {
            Some(codepoint) if is_valid_scalar(codepoint) => StringChar::Valid,
            _ => {
                self.report(LexErrorKind::InvalidUnicodeEscape, char_start);
                StringChar::Invalid
            },
        }
    }

    /// In a multiline literal, a backslash followed by optional horizontal
    /// whitespace and a line break elides the break.
    fn skip_escaped_newline(&mut self) -> bool {
        let mut probe = self.scanner;
        probe.skip_over(&[' ', '\t']);

        if probe.match_char('\r') {
            probe.match_char('\n');
        } else if !probe.match_char('\n') {
            return false;
        }

        self.scanner = probe;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexErrorKind, Token, TokenKind};
    use sparrow_util::Handler;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).collect()
    }

    fn lex_one(source: &str) -> (TokenKind, &str) {
        let token = Lexer::new(source).next_token();
        (token.kind, token.text)
    }

    fn codes_for(source: &str) -> Vec<String> {
        let handler = Handler::new();
        let _ = Lexer::with_handler(source, &handler).count();
        handler
            .diagnostics()
            .iter()
            .filter_map(|d| d.code.map(|c| c.as_str()))
            .collect()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_one(r#""hello""#), (TokenKind::StringLiteral, r#""hello""#));
        assert_eq!(lex_one(r#""""#), (TokenKind::StringLiteral, r#""""#));
    }

    #[test]
    fn test_text_keeps_escapes() {
        let source = r#""a\n\t\\\"\'\0\u{1F600}""#;
        assert_eq!(lex_one(source), (TokenKind::StringLiteral, source));
    }

    #[test]
    fn test_other_quote_is_body() {
        assert_eq!(lex_one(r#""it's""#).0, TokenKind::StringLiteral);
        assert_eq!(lex_one(r#"'say "hi"'"#).0, TokenKind::StringLiteral);
    }

    #[test]
    fn test_single_quotes_warn() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::with_handler("'abc'", &handler).collect();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert!(handler.has_code(LexErrorKind::SingleQuotedString.code()));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_unterminated_at_line_break() {
        let tokens = lex_all("\"abc\nx");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "\"abc");
        assert_eq!(tokens[1].text, "x");
        assert!(tokens[1].is_first_in_line);
    }

    #[test]
    fn test_unterminated_at_end() {
        assert_eq!(lex_one("\"abc"), (TokenKind::Unknown, "\"abc"));
        assert_eq!(codes_for("\"abc"), vec!["L0006"]);
    }

    #[test]
    fn test_invalid_escape() {
        let tokens = lex_all(r#""a\qb" x"#);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, r#""a\qb""#);
        assert_eq!(tokens[1].text, "x");
        assert_eq!(codes_for(r#""a\qb""#), vec!["L0009"]);
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(lex_one(r#""\u{41}""#).0, TokenKind::StringLiteral);
        assert_eq!(lex_one(r#""\u{10FFFF}""#).0, TokenKind::StringLiteral);
        assert_eq!(lex_one(r#""\u{D800}""#).0, TokenKind::Unknown);
        assert_eq!(lex_one(r#""\u{110000}""#).0, TokenKind::Unknown);
        assert_eq!(lex_one(r#""\u{}""#).0, TokenKind::Unknown);
        assert_eq!(lex_one(r#""\u{000000041}""#).0, TokenKind::Unknown);
        assert_eq!(lex_one(r#""\u41""#).0, TokenKind::Unknown);
        assert_eq!(codes_for(r#""\u{D800}""#), vec!["L0010"]);
    }

    #[test]
    fn test_backslash_line_break_in_single_line_string() {
        let tokens = lex_all("\"a\\\nb\"");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "\"a\\");
        assert_eq!(codes_for("\"a\\\n"), vec!["L0009", "L0006"]);
    }

    #[test]
    fn test_multiline_string() {
        let source = "\"\"\"\nline one\n\"quoted\" and \"\"\n\"\"\"";
        assert_eq!(lex_one(source), (TokenKind::StringLiteral, source));
    }

    #[test]
    fn test_multiline_escaped_newline() {
        let source = "\"\"\"\nab \\  \ncd\n\"\"\"";
        assert_eq!(lex_one(source), (TokenKind::StringLiteral, source));
    }

    #[test]
    fn test_unterminated_multiline() {
        assert_eq!(lex_one("\"\"\"\nabc\"\""), (TokenKind::Unknown, "\"\"\"\nabc\"\""));
    }

    #[test]
    fn test_interpolation_is_one_token() {
        let source = "\"a\\(f(1,2))b\"";
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, source);
    }

    #[test]
    fn test_nested_interpolation() {
        let source = r#""outer \(f("inner \(g(")")) done")) end""#;
        assert_eq!(lex_one(source), (TokenKind::StringLiteral, source));
    }

    #[test]
    fn test_multiline_interpolation_spans_lines() {
        let source = "\"\"\"\n\\(a +\n b)\n\"\"\"";
        assert_eq!(lex_one(source), (TokenKind::StringLiteral, source));
    }

    #[test]
    fn test_unterminated_interpolation() {
        let tokens = lex_all("\"a\\(b\nc");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "\"a\\(b");
        assert_eq!(tokens[1].text, "c");
        assert_eq!(codes_for("\"a\\(b\nc"), vec!["L0008", "L0006"]);
    }
}
