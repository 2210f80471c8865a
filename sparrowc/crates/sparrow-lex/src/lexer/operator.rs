//! Operator lexing.
//!
//! Whether an operator is prefix, postfix or binary depends on what touches
//! it. An operator is *left-bound* when the scalar before it is not
//! whitespace, an opening delimiter, or a separator, and *right-bound* when
//! the scalar after it is not whitespace, a closing delimiter, or a
//! separator. Comments count as whitespace on both sides.
//!
//! | left  | right | kind                   |
//! |-------|-------|------------------------|
//! | bound | bound | `OperBinaryUnspaced`   |
//! | free  | free  | `OperBinarySpaced`     |
//! | bound | free  | `OperPostfix`          |
//! | free  | bound | `OperPrefix`           |

use crate::error::LexErrorKind;
use crate::scanner::Position;
use crate::token::TokenKind;
use crate::unicode::{is_operator_body, is_operator_head, is_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns true if the token starting at `start` is left-bound.
    pub(super) fn is_left_bound(&self, start: Position) -> bool {
        let mut scanner = self.scanner;
        scanner.rewind(start);

        if scanner.is_at_start() {
            return false;
        }

        scanner.putback();
        match scanner.peek() {
            c if is_whitespace(c) => false,
            '(' | '[' | '{' | ',' | ';' | ':' | '\0' => false,
            '\u{FEFF}' if scanner.is_at_start() => false,
            '/' => {
                if scanner.is_at_start() {
                    return true;
                }
                // The end of a block comment is whitespace.
                scanner.putback();
                scanner.peek() != '*'
            },
            _ => true,
        }
    }

    /// Returns true if the token ending at `after` is right-bound.
    pub(super) fn is_right_bound(&self, after: Position, left_bound: bool) -> bool {
        let mut scanner = self.scanner;
        scanner.rewind(after);

        match scanner.peek() {
            c if is_whitespace(c) => false,
            ')' | ']' | '}' | ',' | ';' | ':' | '\0' => false,
            // `x^.y` is postfix `^` then member access, `^.y` is prefix `^`.
            '.' => !left_bound,
            '/' if matches!(scanner.peek_next(), '/' | '*') => false,
            _ => true,
        }
    }

    /// Lexes an operator run starting at `start`. The first scalar has been
    /// consumed.
    pub(super) fn lex_operator(&mut self, start: Position) -> TokenKind {
        self.scanner.rewind(start);
        let can_have_periods = self.scanner.peek() == '.';

        self.scanner.match_if(is_operator_head);
        self.scanner.skip_while_pair(|c, next| {
            if !is_operator_body(c) || (c == '.' && !can_have_periods) {
                return false;
            }
            // `//` and `/*` inside a run start a comment.
            !(c == '/' && matches!(next, '/' | '*'))
        });

        let left_bound = self.is_left_bound(start);
        let right_bound = self.is_right_bound(self.scanner.current(), left_bound);

        let text = self.scanner.text(start);
        match text {
            "=" => {
                if left_bound != right_bound {
                    self.report(LexErrorKind::UnbalancedEqualSpacing, start);
                }
                return TokenKind::Equal;
            },
            "&" if !left_bound && right_bound => return TokenKind::AmpPrefix,
            "." if left_bound == right_bound => return TokenKind::Period,
            "." if right_bound => return TokenKind::PeriodPrefix,
            "." => return self.lex_dangling_period(start, left_bound),
            "?" if left_bound => return TokenKind::QuestionPostfix,
            "?" => return TokenKind::QuestionInfix,
            "->" => return TokenKind::Arrow,
            "*/" => {
                self.report(LexErrorKind::StrayBlockCommentEnd, start);
                return TokenKind::Unknown;
            },
            _ if text.len() > 2 && text.contains("*/") => {
                self.report(LexErrorKind::StrayBlockCommentEnd, start);
                return TokenKind::Unknown;
            },
            _ => {},
        }

        match (left_bound, right_bound) {
            (true, true) => TokenKind::OperBinaryUnspaced,
            (false, false) => TokenKind::OperBinarySpaced,
            (true, false) => TokenKind::OperPostfix,
            (false, true) => TokenKind::OperPrefix,
        }
    }

    /// Handles a `.` bound only on its left, as in `x. y` or `x.`.
    ///
    /// Horizontal whitespace before a member name is tolerated with a
    /// warning. Anything else is a missing member name.
    fn lex_dangling_period(&mut self, start: Position, left_bound: bool) -> TokenKind {
        let mut after_whitespace = self.scanner;
        after_whitespace.skip_over(&[' ', '\t']);

        if self.is_right_bound(after_whitespace.current(), left_bound)
            && after_whitespace.peek() != '/'
        {
            self.report_span(
                LexErrorKind::WhitespaceAfterPeriod,
                self.scanner.current(),
                after_whitespace.current(),
            );
            return TokenKind::Period;
        }

        self.report(LexErrorKind::ExpectedMemberName, start);
        TokenKind::Unknown
    }
}
