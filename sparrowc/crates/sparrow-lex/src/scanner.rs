//! Scalar scanner for traversing source text.
//!
//! [`Scanner`] is a cursor over an immutable `&str`. It is `Copy`, so a scan
//! routine that needs to look further ahead than [`Scanner::peek_next`] copies
//! the scanner, probes the copy, and either adopts it or drops it. Nothing
//! has to be undone on the failing path.
//!
//! Positions count scalars as well as bytes: the byte offset slices token
//! text out of the buffer, the scalar index feeds spans.

use std::fmt;

/// A position in the source buffer.
///
/// Positions are only produced by a [`Scanner`] and are always on a scalar
/// boundary between the buffer start and the buffer end inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Byte offset into the source.
    byte: usize,
    /// Number of scalars before this position.
    index: usize,
}

impl Position {
    /// Byte offset of this position.
    #[inline]
    pub fn byte(self) -> usize {
        self.byte
    }

    /// Scalar index of this position.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// A cursor over a source buffer.
///
/// # Example
///
/// ```
/// use sparrow_lex::Scanner;
///
/// let mut scanner = Scanner::new("let x");
/// let start = scanner.current();
/// scanner.skip_while(|c| c.is_ascii_alphabetic());
/// assert_eq!(scanner.text(start), "let");
///
/// // Probing a copy leaves the original untouched.
/// let mut probe = scanner;
/// probe.advance();
/// assert_eq!(probe.peek(), 'x');
/// assert_eq!(scanner.peek(), ' ');
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    current: Position,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            current: Position::default(),
        }
    }

    /// The whole source buffer.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The current position.
    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    /// Returns true if no scalar has been consumed.
    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.current.byte == 0
    }

    /// Returns true if every scalar has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.byte >= self.source.len()
    }

    /// The unconsumed part of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.current.byte..]
    }

    /// Returns the scalar at the current position, or `'\0'` at the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the scalar after the current one, or `'\0'` if there is none.
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Returns the scalar before the current position, or `'\0'` at the
    /// start.
    #[inline]
    pub fn peek_prev(&self) -> char {
        self.source[..self.current.byte]
            .chars()
            .next_back()
            .unwrap_or('\0')
    }

    /// Consumes and returns the current scalar.
    ///
    /// At the end of the buffer this does not move and returns `'\0'`;
    /// callers check [`Scanner::is_at_end`] when the difference matters.
    #[inline]
    pub fn advance(&mut self) -> char {
        match self.remaining().chars().next() {
            Some(c) => {
                self.current.byte += c.len_utf8();
                self.current.index += 1;
                c
            },
            None => '\0',
        }
    }

    /// Steps back over one scalar. Does nothing at the start.
    #[inline]
    pub fn putback(&mut self) {
        if let Some(c) = self.source[..self.current.byte].chars().next_back() {
            self.current.byte -= c.len_utf8();
            self.current.index -= 1;
        }
    }

    /// Jumps to a position previously returned by [`Scanner::current`].
    #[inline]
    pub fn rewind(&mut self, to: Position) {
        debug_assert!(to.byte <= self.source.len());
        debug_assert!(self.source.is_char_boundary(to.byte));
        self.current = to;
    }

    /// Consumes the current scalar if it equals `expected`.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current scalar if it satisfies `predicate`.
    #[inline]
    pub fn match_if(&mut self, predicate: impl FnOnce(char) -> bool) -> bool {
        if !self.is_at_end() && predicate(self.peek()) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` if the remaining text starts with it.
    pub fn match_str(&mut self, literal: &str) -> bool {
        if !literal.is_empty() && self.remaining().starts_with(literal) {
            self.current.byte += literal.len();
            self.current.index += literal.chars().count();
            true
        } else {
            false
        }
    }

    /// Consumes scalars while `predicate` holds.
    pub fn skip_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    /// Consumes scalars that appear in `set`.
    pub fn skip_over(&mut self, set: &[char]) {
        self.skip_while(|c| set.contains(&c));
    }

    /// Consumes scalars while `predicate(current, next)` holds.
    pub fn skip_while_pair(&mut self, mut predicate: impl FnMut(char, char) -> bool) {
        while !self.is_at_end() && predicate(self.peek(), self.peek_next()) {
            self.advance();
        }
    }

    /// Consumes scalars up to, but not including, the next line break.
    pub fn skip_to_line_end(&mut self) {
        self.skip_while(|c| c != '\n' && c != '\r');
    }

    /// The exact source text between `from` and the current position.
    #[inline]
    pub fn text(&self, from: Position) -> &'a str {
        &self.source[from.byte..self.current.byte]
    }
}
