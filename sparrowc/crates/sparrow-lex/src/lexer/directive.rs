//! `#` directive lexing.

use crate::scanner::Position;
use crate::token::TokenKind;
use crate::unicode::{is_identifier_body, is_identifier_head};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a directive such as `#if`, or a bare `#`. The `#` has been
    /// consumed.
    ///
    /// A `#!` line at the very start of the input, or right after a leading
    /// byte order mark, is a hashbang and lexes as a comment. A name that is not a known directive is left for the next
    /// token.
    pub(super) fn lex_hash(&mut self, start: Position) -> TokenKind {
        let at_source_start = matches!(&self.source()[..start.byte()], "" | "\u{FEFF}");
        if at_source_start && self.scanner.peek() == '!' {
            self.scanner.skip_to_line_end();
            return TokenKind::Comment;
        }

        let after_pound = self.scanner.current();
        if self.scanner.match_if(is_identifier_head) {
            self.scanner.skip_while(is_identifier_body);
        }

        match TokenKind::from_directive(self.scanner.text(after_pound)) {
            Some(kind) => kind,
            None => {
                self.scanner.rewind(after_pound);
                TokenKind::Pound
            },
        }
    }
}
