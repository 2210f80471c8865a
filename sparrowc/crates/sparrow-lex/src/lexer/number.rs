//! Number literal lexing.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `1_000`
//! - Hexadecimal: `0xFF`, `0xAB_CD`
//! - Octal: `0o777`
//! - Binary: `0b1010`
//! - Float: `3.14`, `1e10`, `2.5e-3`
//! - Hex float: `0x1.8p3`, `0x1p-2`
//!
//! A literal that runs straight into an identifier character (`1a1`, `0b3`)
//! is one [`Unknown`](TokenKind::Unknown) token, not a literal followed by an
//! identifier.

use crate::error::LexErrorKind;
use crate::scanner::Position;
use crate::token::TokenKind;
use crate::unicode::{is_digit, is_digit_in_base, is_hex_digit, is_identifier_body};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal. The first digit has been consumed.
    pub(super) fn lex_number(&mut self, start: Position) -> TokenKind {
        if self.scanner.text(start) == "0" {
            match self.scanner.peek() {
                'x' => return self.lex_hex_number(start),
                'o' => return self.lex_radix_integer(start, 8, "octal", "0o"),
                'b' => return self.lex_radix_integer(start, 2, "binary", "0b"),
                _ => {},
            }
        }

        self.skip_digits(10);

        if self.scanner.peek() == '.' {
            // `4.x` is `4` then a member access, and `t.0.1` is a chain of
            // tuple element accesses rather than `t`, `.`, `0.1`.
            if !is_digit(self.scanner.peek_next()) || self.follows_period() {
                return TokenKind::IntegerLiteral;
            }
        } else if !matches!(self.scanner.peek(), 'e' | 'E') {
            return self.finish_literal(start, TokenKind::IntegerLiteral, "integer");
        }

        if self.scanner.match_char('.') {
            self.skip_digits(10);
        }

        if self.scanner.match_if(|c| c == 'e' || c == 'E') {
            self.scanner.match_if(|c| c == '+' || c == '-');
            if !is_digit(self.scanner.peek()) {
                return self.malformed_literal(start, LexErrorKind::ExpectedExponentDigit);
            }
            self.skip_digits(10);
        }

        self.finish_literal(start, TokenKind::FloatingLiteral, "floating point")
    }

    /// Lexes `0o` and `0b` literals. The scanner is on the radix letter.
    fn lex_radix_integer(
        &mut self,
        start: Position,
        base: u32,
        name: &'static str,
        prefix: &'static str,
    ) -> TokenKind {
        self.scanner.advance();

        let c = self.scanner.peek();
        if !is_digit_in_base(c, base) {
            return self.missing_digits(start, c, name, prefix);
        }

        self.skip_digits(base);
        self.finish_literal(start, TokenKind::IntegerLiteral, name)
    }

    /// Lexes `0x` literals, including hexadecimal floats. The scanner is on
    /// the `x`.
    ///
    /// A fraction with no `p` exponent is not part of the literal: `0xff.max`
    /// and `0x1.8` are an integer followed by a member access.
    fn lex_hex_number(&mut self, start: Position) -> TokenKind {
        self.scanner.advance();

        let c = self.scanner.peek();
        if !is_hex_digit(c) {
            return self.missing_digits(start, c, "hexadecimal", "0x");
        }

        self.skip_digits(16);

        if !matches!(self.scanner.peek(), '.' | 'p' | 'P') {
            return self.finish_literal(start, TokenKind::IntegerLiteral, "hexadecimal");
        }

        let on_dot = self.scanner.current();
        let has_fraction = self.scanner.peek() == '.';
        let fraction_head = self.scanner.peek_next();

        if has_fraction {
            let mut probe = self.scanner;
            probe.advance();
            if !is_hex_digit(probe.peek()) {
                return TokenKind::IntegerLiteral;
            }
            probe.skip_while(|c| is_hex_digit(c) || c == '_');
            if !matches!(probe.peek(), 'p' | 'P') {
                return TokenKind::IntegerLiteral;
            }
            self.scanner = probe;
        }

        self.scanner.advance();
        let signed = self.scanner.match_if(|c| c == '+' || c == '-');

        if !is_digit(self.scanner.peek()) {
            // `0xff.fpValue` reads as `0xff` then `.fpValue`.
            if has_fraction && !is_digit(fraction_head) && !signed {
                self.scanner.rewind(on_dot);
                return TokenKind::IntegerLiteral;
            }
            return self.malformed_literal(start, LexErrorKind::ExpectedHexFloatExponent);
        }

        self.skip_digits(10);
        self.finish_literal(start, TokenKind::FloatingLiteral, "hexadecimal floating point")
    }

    fn skip_digits(&mut self, base: u32) {
        self.scanner
            .skip_while(|c| is_digit_in_base(c, base) || c == '_');
    }

    /// True if the previous token was a `.`.
    fn follows_period(&self) -> bool {
        matches!(
            self.last_token,
            Some(TokenKind::Period | TokenKind::PeriodPrefix)
        )
    }

    /// Ends a literal, rejecting it if an identifier character follows.
    fn finish_literal(&mut self, start: Position, kind: TokenKind, base: &'static str) -> TokenKind {
        let c = self.scanner.peek();
        if is_identifier_body(c) {
            return self.malformed_literal(start, LexErrorKind::InvalidDigit { digit: c, base });
        }
        kind
    }

    /// A radix prefix with no digit after it.
    fn missing_digits(
        &mut self,
        start: Position,
        c: char,
        name: &'static str,
        prefix: &'static str,
    ) -> TokenKind {
        let kind = if is_identifier_body(c) {
            LexErrorKind::InvalidDigit { digit: c, base: name }
        } else {
            LexErrorKind::ExpectedDigitAfterPrefix(prefix)
        };
        self.malformed_literal(start, kind)
    }

    /// Swallows the rest of the identifier-like run and reports `kind`.
    fn malformed_literal(&mut self, start: Position, kind: LexErrorKind) -> TokenKind {
        self.scanner.skip_while(is_identifier_body);
        self.report(kind, start);
        TokenKind::Unknown
    }
}
