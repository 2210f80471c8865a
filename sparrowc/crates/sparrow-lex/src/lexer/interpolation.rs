//! Skipping over `\( ... )` segments in string literals.
//!
//! The expression inside an interpolation is not tokenized here. This scan
//! only balances parentheses and nested string literals so the enclosing
//! string can find its end; a parser re-lexes the captured span with a fresh
//! [`Lexer`](crate::Lexer).

use crate::scanner::{Position, Scanner};

/// Scans from just after `\(` to the `)` that closes the interpolation.
///
/// Returns the position of that `)` without consuming it. On failure returns
/// the position of the offending line break, or the end of input.
///
/// `multiline` is true when the enclosing literal is a `"""` string, in which
/// case line breaks are allowed outside nested single-line strings.
pub(super) fn skip_to_end_of_interpolation(
    mut scanner: Scanner<'_>,
    multiline: bool,
) -> Result<Position, Position> {
    // `(` or the quote that opened a nested string.
    let mut open_delimiters: Vec<char> = Vec::new();
    // One entry per nested string, plus one for the enclosing literal.
    let mut allow_newline: Vec<bool> = vec![multiline];

    let in_string_literal =
        |open: &[char]| matches!(open.last(), Some('"') | Some('\''));

    loop {
        let here = scanner.current();
        if scanner.is_at_end() {
            return Err(here);
        }

        let newline_allowed = allow_newline.last().copied().unwrap_or(false);

        match scanner.advance() {
            '\n' | '\r' => {
                if !newline_allowed {
                    return Err(here);
                }
            },

            quote @ ('"' | '\'') => {
                if !newline_allowed && in_string_literal(&open_delimiters) {
                    // Either the end of a single-line string, or a stray
                    // quote inside one, as in "foo's".
                    if open_delimiters.last() == Some(&quote) {
                        open_delimiters.pop();
                        allow_newline.pop();
                    }
                    continue;
                }

                let is_multiline_quote = quote == '"' && scanner.match_str("\"\"");

                if !in_string_literal(&open_delimiters) {
                    open_delimiters.push(quote);
                    allow_newline.push(is_multiline_quote);
                } else if is_multiline_quote {
                    open_delimiters.pop();
                    allow_newline.pop();
                }
            },

            '\\' if in_string_literal(&open_delimiters) => match scanner.peek() {
                '(' => {
                    scanner.advance();
                    open_delimiters.push('(');
                },
                // A backslash never hides a line break.
                '\n' | '\r' => return Err(scanner.current()),
                _ => {
                    scanner.advance();
                },
            },

            '(' if !in_string_literal(&open_delimiters) => open_delimiters.push('('),

            ')' => match open_delimiters.last() {
                None => return Ok(here),
                Some('(') => {
                    open_delimiters.pop();
                },
                Some(_) => {},
            },

            _ => {},
        }
    }
}
