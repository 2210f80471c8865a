//! Common types and utilities for sparrowt commands.
//!
//! Reading input files, running the lexer over several files on a rayon
//! pool, and the serializable views of tokens and diagnostics.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use sparrow_lex::{Token, TokenKind};
use sparrow_util::Diagnostic;

use crate::error::{Result, SparrowtError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `kind("text")` line per token
    Text,
    /// A JSON document per run
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(SparrowtError::Validation(format!("Unknown format: {}", s))),
        }
    }

    /// The name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Serializable views
// ============================================================================

/// One token as written to JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Token kind, serialized by name, e.g. `integerLiteral`.
    #[serde(serialize_with = "serialize_kind")]
    pub kind: TokenKind,
    /// Exact source text.
    pub text: String,
    /// Scalar index of the first scalar.
    pub start: usize,
    /// Scalar index one past the last scalar.
    pub end: usize,
    /// Whether a line break precedes the token.
    pub first_in_line: bool,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind,
            text: token.text.to_string(),
            start: token.span.start,
            end: token.span.end,
            first_in_line: token.is_first_in_line,
        }
    }
}

fn serialize_kind<S>(kind: &TokenKind, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(kind.name())
}

/// A lexed file: its tokens, or the diagnostics found in it.
#[derive(Debug, Clone)]
pub struct FileReport<T> {
    /// The input path as given.
    pub path: PathBuf,
    /// What the command collected for this file.
    pub items: Vec<T>,
}

/// Per-kind token counts across all files.
#[derive(Debug, Default)]
pub struct KindStats {
    counts: FxHashMap<TokenKind, usize>,
}

impl KindStats {
    /// Counts `kind` once.
    pub fn record(&mut self, kind: TokenKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Total tokens recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts sorted by descending frequency, then by name.
    pub fn sorted(&self) -> Vec<(TokenKind, usize)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, n)| (*k, *n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));
        entries
    }
}

// ============================================================================
// File processing
// ============================================================================

/// Reads a source file, naming the path in the error.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SparrowtError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs `process` over every input on a pool of `jobs` threads.
///
/// Lexer sessions share nothing, so files are independent. Results come back
/// in input order.
pub fn process_files<T, F>(
    paths: &[PathBuf],
    jobs: usize,
    process: F,
) -> Result<Vec<FileReport<T>>>
where
    T: Send,
    F: Fn(&str) -> Vec<T> + Sync,
{
    if paths.is_empty() {
        return Err(SparrowtError::Validation("No input files specified".to_string()));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .build()
        .map_err(|e| SparrowtError::Config(format!("Failed to start worker pool: {}", e)))?;

    pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let source = read_source(path)?;
                tracing::debug!("lexing {} ({} bytes)", path.display(), source.len());
                Ok(FileReport {
                    path: path.clone(),
                    items: process(&source),
                })
            })
            .collect()
    })
}

/// Renders a diagnostic prefixed by its file.
pub fn render_diagnostic(path: &Path, diagnostic: &Diagnostic) -> String {
    format!("{}: {}", path.display(), diagnostic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparrow_util::Span;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(SparrowtError::Validation(_))
        ));
    }

    #[test]
    fn test_token_record_from_token() {
        let token = Token::new(TokenKind::IntegerLiteral, "42", true, Span::new(4, 6));
        let record = TokenRecord::from(&token);
        assert_eq!(record.kind, TokenKind::IntegerLiteral);
        assert_eq!(record.text, "42");
        assert_eq!((record.start, record.end), (4, 6));
        assert!(record.first_in_line);
    }

    #[test]
    fn test_kind_stats_sorted() {
        let mut stats = KindStats::default();
        for kind in [TokenKind::Identifier, TokenKind::Comma, TokenKind::Identifier] {
            stats.record(kind);
        }
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.sorted(),
            vec![(TokenKind::Identifier, 2), (TokenKind::Comma, 1)]
        );
    }

    #[test]
    fn test_process_files_keeps_order() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<_> = (0..8)
            .map(|i| {
                let path = dir.path().join(format!("f{}.sp", i));
                std::fs::write(&path, "x ".repeat(i)).unwrap();
                path
            })
            .collect();

        let reports = process_files(&paths, 4, |src| vec![src.len()]).unwrap();
        let lens: Vec<_> = reports.iter().map(|r| r.items[0]).collect();
        assert_eq!(lens, vec![0, 2, 4, 6, 8, 10, 12, 14]);
    }

    #[test]
    fn test_process_files_missing_file() {
        let result = process_files(&[PathBuf::from("/nonexistent.sp")], 1, |_| Vec::<()>::new());
        assert!(matches!(result, Err(SparrowtError::ReadFile { .. })));
    }

    #[test]
    fn test_process_files_requires_input() {
        let result = process_files(&[], 1, |_| Vec::<()>::new());
        assert!(matches!(result, Err(SparrowtError::Validation(_))));
    }
}
