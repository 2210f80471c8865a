//! Comment lexing.
//!
//! Line comments stop before the line break so the break is seen by the
//! whitespace scan. Block comments nest.

use crate::error::LexErrorKind;
use crate::scanner::Position;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `//` comment. The first `/` has been consumed.
    pub(super) fn lex_line_comment(&mut self) -> TokenKind {
        self.scanner.advance();
        self.scanner.skip_to_line_end();
        TokenKind::Comment
    }

    /// Lexes a nested `/* */` comment. The first `/` has been consumed.
    ///
    /// An unterminated comment runs to the end of input and becomes an
    /// [`Unknown`](TokenKind::Unknown) token.
    pub(super) fn lex_block_comment(&mut self, start: Position) -> TokenKind {
        self.scanner.advance();
        let mut depth: u32 = 1;

        while !self.scanner.is_at_end() {
            match self.scanner.advance() {
                '*' if self.scanner.match_char('/') => {
                    depth -= 1;
                    if depth == 0 {
                        return TokenKind::Comment;
                    }
                },
                '/' if self.scanner.match_char('*') => depth += 1,
                '\n' | '\r' => self.pending_line_break = true,
                _ => {},
            }
        }

        self.report(LexErrorKind::UnterminatedBlockComment, start);
        TokenKind::Unknown
    }
}
