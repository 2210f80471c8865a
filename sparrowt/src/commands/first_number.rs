//! First-number command implementation.
//!
//! A small demonstration of [`Scanner`]: find the first decimal number in
//! a line of text.

use std::io::Write;

use sparrow_lex::unicode::is_digit;
use sparrow_lex::Scanner;

use crate::error::Result;

/// Inputs used when none are given on the command line.
pub const DEMO_INPUTS: [&str; 6] = [
    "The price of admission is: 12.34 USD",
    "This one does not have a number.",
    "This one does not have a decimal component: 123.",
    "9",
    "l33t",
    "",
];

/// Returns the first run of digits in `source`, with its fractional part if
/// a `.` is directly followed by a digit. Empty when there is no digit.
pub fn find_first_number(source: &str) -> &str {
    let mut scanner = Scanner::new(source);

    scanner.skip_while(|c| !is_digit(c));
    let first_digit = scanner.current();
    scanner.skip_while(is_digit);

    if scanner.peek() == '.' && is_digit(scanner.peek_next()) {
        scanner.advance();
        scanner.skip_while(is_digit);
    }

    scanner.text(first_digit)
}

/// Prints an `IN:`/`FOUND:` pair for each input.
pub fn run_first_number(inputs: &[String], out: &mut impl Write) -> Result<()> {
    let demo: Vec<String>;
    let inputs = if inputs.is_empty() {
        demo = DEMO_INPUTS.iter().map(|s| s.to_string()).collect();
        &demo
    } else {
        inputs
    };

    for input in inputs {
        writeln!(out, "IN:    {}", input)?;
        writeln!(out, "FOUND: {}", find_first_number(input))?;
    }
    Ok(())
}
