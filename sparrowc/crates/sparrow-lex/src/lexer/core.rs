//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the dispatch on the lead scalar
//! of each token, and the bookkeeping shared by every scan routine.

use sparrow_util::{DiagnosticBuilder, Handler, Span};

use crate::error::LexErrorKind;
use crate::scanner::{Position, Scanner};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_identifier_head, is_operator_head, is_whitespace};

/// Lexer for sparrow source text.
///
/// Call [`Lexer::next_token`] until it returns an [`Eof`](TokenKind::Eof)
/// token. Whitespace and comments are skipped unless
/// [`Lexer::retain_trivia`] is set.
///
/// # Example
///
/// ```
/// use sparrow_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x+y");
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().kind, TokenKind::OperBinaryUnspaced);
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Authoritative cursor. Scan routines probe copies of it.
    pub(super) scanner: Scanner<'a>,

    /// Diagnostic sink, if any.
    handler: Option<&'a Handler>,

    /// True until a non-trivia token is formed after a line break.
    pub(super) first_in_line: bool,

    /// A line break was consumed inside the token being scanned. Applied to
    /// `first_in_line` once that token is formed or skipped.
    pub(super) pending_line_break: bool,

    /// Kind of the last non-trivia token formed.
    pub(super) last_token: Option<TokenKind>,

    /// Whether whitespace and comments are returned as tokens.
    retain_trivia: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer that reports nothing.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            handler: None,
            first_in_line: true,
            pending_line_break: false,
            last_token: None,
            retain_trivia: false,
        }
    }

    /// Creates a lexer that reports malformed input to `handler`.
    ///
    /// The tokens produced are the same as with [`Lexer::new`].
    ///
    /// ```
    /// use sparrow_lex::{Lexer, TokenKind};
    /// use sparrow_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut lexer = Lexer::with_handler("0b102", &handler);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Unknown);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn with_handler(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            handler: Some(handler),
            ..Self::new(source)
        }
    }

    /// Returns whitespace and comments as [`Whitespace`](TokenKind::Whitespace)
    /// and [`Comment`](TokenKind::Comment) tokens instead of skipping them.
    ///
    /// With trivia retained, the texts of all tokens concatenate back to the
    /// source.
    pub fn retain_trivia(mut self, retain: bool) -> Self {
        self.retain_trivia = retain;
        self
    }

    /// The source text being lexed.
    pub fn source(&self) -> &'a str {
        self.scanner.source()
    }

    /// Scalar index of the next scalar to be lexed.
    pub fn position(&self) -> usize {
        self.scanner.current().index()
    }

    /// Returns the next token.
    ///
    /// At the end of input this keeps returning an empty
    /// [`Eof`](TokenKind::Eof) token.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            let start = self.scanner.current();

            if self.scanner.is_at_end() {
                return Token::new(
                    TokenKind::Eof,
                    "",
                    self.first_in_line,
                    Span::point(start.index()),
                );
            }

            let kind = self.lex_token(start);
            if kind.is_trivia() && !self.retain_trivia {
                self.apply_pending_line_break();
                continue;
            }
            return self.form_token(kind, start);
        }
    }

    /// Consumes one token's worth of input and classifies it.
    fn lex_token(&mut self, start: Position) -> TokenKind {
        let c = self.scanner.advance();

        match c {
            '\n' | '\r' => {
                self.pending_line_break = true;
                self.lex_whitespace()
            },
            '\u{FEFF}' if start.byte() == 0 => TokenKind::Whitespace,
            c if is_whitespace(c) => self.lex_whitespace(),

            '@' => TokenKind::AtSign,
            '{' => TokenKind::LBrace,
            '[' => TokenKind::LSquare,
            '(' => TokenKind::LParen,
            '}' => TokenKind::RBrace,
            ']' => TokenKind::RSquare,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            ':' => TokenKind::Colon,
            '\\' => TokenKind::Backslash,

            '#' => self.lex_hash(start),

            '/' if self.scanner.peek() == '/' => self.lex_line_comment(),
            '/' if self.scanner.peek() == '*' => self.lex_block_comment(start),

            '!' if self.is_left_bound(start) => TokenKind::ExclaimPostfix,
            '?' if self.is_left_bound(start) => TokenKind::QuestionPostfix,

            '!' | '?' | '/' | '%' | '<' | '>' | '=' | '-' | '+' | '*' | '&' | '|' | '^' | '~'
            | '.' => self.lex_operator(start),

            c if is_identifier_head(c) => self.lex_identifier(start),
            '$' => self.lex_dollar_ident(start),
            c if is_digit(c) => self.lex_number(start),
            '"' | '\'' => self.lex_string(start, c),
            '`' => self.lex_escaped_identifier(start),

            c if is_operator_head(c) => self.lex_operator(start),

            c => {
                self.report(LexErrorKind::UnknownCharacter(c), start);
                TokenKind::Unknown
            },
        }
    }

    /// Consumes the rest of a whitespace run, noting line breaks.
    fn lex_whitespace(&mut self) -> TokenKind {
        while !self.scanner.is_at_end() && is_whitespace(self.scanner.peek()) {
            if matches!(self.scanner.advance(), '\n' | '\r') {
                self.pending_line_break = true;
            }
        }
        TokenKind::Whitespace
    }

    /// Builds the token spanning `start` to the current position.
    pub(super) fn form_token(&mut self, kind: TokenKind, start: Position) -> Token<'a> {
        let end = self.scanner.current();
        let token = Token::new(
            kind,
            self.scanner.text(start),
            self.first_in_line,
            Span::new(start.index(), end.index()),
        );

        if !kind.is_trivia() {
            self.first_in_line = false;
            self.last_token = Some(kind);
        }
        self.apply_pending_line_break();

        tracing::trace!("formed {} at {}", token, token.span);
        token
    }

    fn apply_pending_line_break(&mut self) {
        if std::mem::take(&mut self.pending_line_break) {
            self.first_in_line = true;
        }
    }

    /// Reports `kind` over `start` to the current position.
    pub(super) fn report(&self, kind: LexErrorKind, start: Position) {
        self.report_span(kind, start, self.scanner.current());
    }

    /// Reports `kind` over an explicit range.
    pub(super) fn report_span(&self, kind: LexErrorKind, start: Position, end: Position) {
        let Some(handler) = self.handler else {
            return;
        };

        let span = Span::new(start.index(), end.index());
        tracing::debug!("{} {} at {}: {}", kind.level(), kind.code(), span, kind);

        let mut builder = DiagnosticBuilder::new(kind.level(), kind.to_string())
            .code(kind.code())
            .span(span);
        if let Some(help) = kind.help() {
            builder = builder.help(help);
        }
        builder.emit(handler);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, [`Eof`](TokenKind::Eof).
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
