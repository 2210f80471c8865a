//! Scalar classification for the sparrow lexer.
//!
//! Every Unicode scalar gets a small set of lexical roles ([`ScalarInfo`]).
//! The roles of ASCII scalars come from a table built at compile time; every
//! other scalar has no roles. Identifiers are therefore ASCII-only.
//!
//! Operator characters are the exception: [`is_operator_head`] and
//! [`is_operator_body`] range-check code points against the mathematical,
//! symbol, arrow and box-drawing blocks so user-defined operators can use a
//! wide glyph repertoire.

use bitflags::bitflags;

bitflags! {
    /// Lexical roles of a single scalar.
    ///
    /// # Example
    ///
    /// ```
    /// use sparrow_lex::unicode::{scalar_info, ScalarInfo};
    ///
    /// assert_eq!(scalar_info('a'), ScalarInfo::HEX_LOWER);
    /// assert!(scalar_info('{').contains(ScalarInfo::RAW_DELIM));
    /// assert!(scalar_info('λ').is_empty());
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScalarInfo: u16 {
        /// `\t`, vertical tab and form feed. `\0` is not whitespace.
        const HORZ_WS = 0x0001;
        /// `\r`, `\n`
        const VERT_WS = 0x0002;
        /// ` `
        const SPACE = 0x0004;
        /// `0-9`
        const DIGIT = 0x0008;
        /// `a-f`, `A-F`
        const HEX_LETTER = 0x0010;
        /// `A-Z`
        const UPPER = 0x0020;
        /// `a-z`
        const LOWER = 0x0040;
        /// `_`
        const UNDER = 0x0080;
        /// `.`
        const PERIOD = 0x0100;
        /// `{}[]#<>%:;?*+-/^&|~!=,"'`
        const RAW_DELIM = 0x0200;
        /// `` `$@()\ ``
        const PUNCT = 0x0400;

        /// `A-F`
        const HEX_UPPER = Self::HEX_LETTER.bits() | Self::UPPER.bits();
        /// `a-f`
        const HEX_LOWER = Self::HEX_LETTER.bits() | Self::LOWER.bits();
    }
}

const fn classify_ascii(byte: u8) -> ScalarInfo {
    match byte {
        b'\t' | 0x0B | 0x0C => ScalarInfo::HORZ_WS,
        b'\n' | b'\r' => ScalarInfo::VERT_WS,
        b' ' => ScalarInfo::SPACE,
        b'0'..=b'9' => ScalarInfo::DIGIT,
        b'A'..=b'F' => ScalarInfo::HEX_UPPER,
        b'G'..=b'Z' => ScalarInfo::UPPER,
        b'a'..=b'f' => ScalarInfo::HEX_LOWER,
        b'g'..=b'z' => ScalarInfo::LOWER,
        b'_' => ScalarInfo::UNDER,
        b'.' => ScalarInfo::PERIOD,
        b'$' | b'(' | b')' | b'@' | b'\\' | b'`' => ScalarInfo::PUNCT,
        b'!' | b'"' | b'#' | b'%' | b'&' | b'\'' | b'*' | b'+' | b',' | b'-' | b'/' => {
            ScalarInfo::RAW_DELIM
        },
        b':'..=b'?' | b'[' | b']' | b'^' | b'{'..=b'~' => ScalarInfo::RAW_DELIM,
        _ => ScalarInfo::empty(),
    }
}

static ASCII_INFO: [ScalarInfo; 128] = {
    let mut table = [ScalarInfo::empty(); 128];
    let mut i = 0;
    while i < 128 {
        table[i] = classify_ascii(i as u8);
        i += 1;
    }
    table
};

/// Returns the lexical roles of `c`. Total over all scalars.
#[inline]
pub fn scalar_info(c: char) -> ScalarInfo {
    ASCII_INFO
        .get(c as usize)
        .copied()
        .unwrap_or(ScalarInfo::empty())
}

#[inline]
fn has_any(c: char, roles: ScalarInfo) -> bool {
    scalar_info(c).intersects(roles)
}

/// Checks if a scalar is an ASCII letter or digit.
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    has_any(c, ScalarInfo::DIGIT | ScalarInfo::UPPER | ScalarInfo::LOWER)
}

/// Checks if a scalar is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    has_any(c, ScalarInfo::DIGIT)
}

/// Checks if a scalar is an ASCII hexadecimal digit.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    has_any(c, ScalarInfo::DIGIT | ScalarInfo::HEX_LETTER)
}

/// Checks if a scalar is a space, tab, vertical tab or form feed.
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
    has_any(c, ScalarInfo::HORZ_WS | ScalarInfo::SPACE)
}

/// Checks if a scalar is horizontal whitespace or a line break.
///
/// ```
/// use sparrow_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\t'));
/// assert!(!is_whitespace('\0'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    has_any(c, ScalarInfo::HORZ_WS | ScalarInfo::VERT_WS | ScalarInfo::SPACE)
}

/// Checks if a scalar is a line break.
#[inline]
pub fn is_line_break(c: char) -> bool {
    has_any(c, ScalarInfo::VERT_WS)
}

/// Checks if a scalar is printable ASCII.
#[inline]
pub fn is_printable(c: char) -> bool {
    has_any(
        c,
        ScalarInfo::UPPER
            | ScalarInfo::LOWER
            | ScalarInfo::PERIOD
            | ScalarInfo::PUNCT
            | ScalarInfo::DIGIT
            | ScalarInfo::UNDER
            | ScalarInfo::RAW_DELIM
            | ScalarInfo::SPACE,
    )
}

/// Checks if a character may start an identifier: `[A-Za-z_]`.
///
/// ```
/// use sparrow_lex::unicode::is_identifier_head;
///
/// assert!(is_identifier_head('a'));
/// assert!(is_identifier_head('_'));
/// assert!(!is_identifier_head('1'));
/// assert!(!is_identifier_head('α'));
/// ```
#[inline]
pub fn is_identifier_head(c: char) -> bool {
    has_any(c, ScalarInfo::UPPER | ScalarInfo::LOWER | ScalarInfo::UNDER)
}

/// Checks if a character may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_identifier_body(c: char) -> bool {
    has_any(
        c,
        ScalarInfo::UPPER | ScalarInfo::LOWER | ScalarInfo::DIGIT | ScalarInfo::UNDER,
    )
}

/// Checks if a character may start an operator.
///
/// ```
/// use sparrow_lex::unicode::is_operator_head;
///
/// assert!(is_operator_head('+'));
/// assert!(is_operator_head('.'));
/// assert!(is_operator_head('∘'));
/// assert!(!is_operator_head('a'));
/// assert!(!is_operator_head('\u{301}')); // combining acute accent
/// ```
pub fn is_operator_head(c: char) -> bool {
    if c.is_ascii() {
        return matches!(
            c,
            '/' | '=' | '-' | '+' | '*' | '%' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '.' | '?'
        );
    }

    matches!(
        c as u32,
        0x00A1..=0x00A7
            | 0x00A9
            | 0x00AB
            | 0x00AC
            | 0x00AE
            | 0x00B0
            | 0x00B1
            | 0x00B6
            | 0x00BB
            | 0x00BF
            | 0x00D7
            | 0x00F7
            | 0x2016
            | 0x2017
            | 0x2020..=0x2027
            | 0x2030..=0x203E
            | 0x2041..=0x2053
            | 0x2055..=0x205E
            | 0x2190..=0x23FF
            | 0x2500..=0x2775
            | 0x2794..=0x2BFF
            | 0x2E00..=0x2E7F
            | 0x3001..=0x3003
            | 0x3008..=0x3030
    )
}

/// Checks if a character may continue an operator: any operator head, plus
/// combining marks and variation selectors.
pub fn is_operator_body(c: char) -> bool {
    if is_operator_head(c) {
        return true;
    }

    matches!(
        c as u32,
        0x0300..=0x036F
            | 0x1DC0..=0x1DFF
            | 0x20D0..=0x20FF
            | 0xFE00..=0xFE0F
            | 0xFE20..=0xFE2F
            | 0xE0100..=0xE01EF
    )
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// ```
/// use sparrow_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('2', 2));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => is_digit(c),
        16 => is_hex_digit(c),
        _ => false,
    }
}

/// Converts a hex character to its numeric value.
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Parses up to eight hex digits into a code point value.
///
/// ```
/// use sparrow_lex::unicode::parse_hex_codepoint;
///
/// assert_eq!(parse_hex_codepoint("1F600"), Some(0x1F600));
/// assert_eq!(parse_hex_codepoint("110000"), None);
/// assert_eq!(parse_hex_codepoint(""), None);
/// ```
pub fn parse_hex_codepoint(hex: &str) -> Option<u32> {
    if hex.is_empty() || hex.len() > 8 {
        return None;
    }
    let mut value = 0u32;
    for c in hex.chars() {
        value = value.checked_mul(16)?;
        value = value.checked_add(hex_digit_to_value(c)? as u32)?;
    }
    if value > 0x10FFFF {
        return None;
    }
    Some(value)
}

/// Checks if a codepoint is a valid Unicode scalar value (not a surrogate,
/// not above U+10FFFF).
pub fn is_valid_scalar(codepoint: u32) -> bool {
    codepoint <= 0x10FFFF && !(0xD800..=0xDFFF).contains(&codepoint)
}
