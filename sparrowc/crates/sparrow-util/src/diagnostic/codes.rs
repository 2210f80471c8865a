//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and suppress
//! specific warnings.
//!
//! # Examples
//!
//! ```
//! use sparrow_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("L", 3);
//! assert_eq!(code.prefix(), "L");
//! assert_eq!(code.number(), 3);
//! assert_eq!(code.as_str(), "L0003");
//! ```

use std::str::FromStr;

use crate::error::DiagnosticError;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` names the phase: "L" for the lexer, "E"/"W" for generic errors
///   and warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "L" for lexer)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Prefixes recognised by [`FromStr`].
    pub const KNOWN_PREFIXES: [&'static str; 3] = ["L", "E", "W"];

    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "L0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    /// Parses codes such as `L0013`. The numeric part may be unpadded.
    ///
    /// ```
    /// use sparrow_util::diagnostic::DiagnosticCode;
    ///
    /// let code: DiagnosticCode = "L0013".parse().unwrap();
    /// assert_eq!(code, DiagnosticCode::new("L", 13));
    /// assert!("L".parse::<DiagnosticCode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| DiagnosticError::InvalidCode(s.to_string()))?;
        let (prefix, digits) = s.split_at(split);

        let number = digits
            .parse::<u32>()
            .map_err(|_| DiagnosticError::InvalidCode(s.to_string()))?;

        let prefix = Self::KNOWN_PREFIXES
            .iter()
            .copied()
            .find(|known| *known == prefix)
            .ok_or_else(|| DiagnosticError::UnknownPrefix {
                prefix: prefix.to_string(),
                code: s.to_string(),
            })?;

        Ok(Self::new(prefix, number))
    }
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
