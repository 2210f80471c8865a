//! Check command implementation.
//!
//! Lexes each input with a diagnostics handler attached and prints what it
//! reports. Fails when any error-level diagnostic survives the allow list.

use std::io::Write;
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use sparrow_lex::Lexer;
use sparrow_util::{Diagnostic, DiagnosticCode, Handler, Level};

use crate::commands::common::{process_files, render_diagnostic};
use crate::config::Config;
use crate::error::{Result, SparrowtError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub input: Vec<PathBuf>,
    /// Extra codes to suppress, on top of the configuration.
    pub allow: Vec<String>,
    /// Number of parallel jobs; falls back to the configuration.
    pub jobs: Option<usize>,
}

/// Totals over all checked files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files lexed.
    pub files: usize,
    /// Error-level diagnostics reported.
    pub errors: usize,
    /// Warning-level diagnostics reported.
    pub warnings: usize,
}

/// Parses the allow list into codes.
fn parse_allow_list<'a>(
    codes: impl IntoIterator<Item = &'a String>,
) -> Result<FxHashSet<DiagnosticCode>> {
    codes
        .into_iter()
        .map(|code| {
            code.parse::<DiagnosticCode>()
                .map_err(|e| SparrowtError::Validation(format!("Invalid allow entry: {}", e)))
        })
        .collect()
}

fn lex_diagnostics(source: &str) -> Vec<Diagnostic> {
    let handler = Handler::new();
    let _ = Lexer::with_handler(source, &handler).count();
    handler.take_diagnostics()
}

/// Checks every input and writes its diagnostics to `out`.
///
/// Returns [`SparrowtError::LexicalErrors`] when errors were reported.
pub fn run_check(args: CheckArgs, config: &Config, out: &mut impl Write) -> Result<CheckSummary> {
    let allowed = parse_allow_list(config.check.allow.iter().chain(&args.allow))?;
    let jobs = args.jobs.unwrap_or(config.jobs);

    let reports = process_files(&args.input, jobs, lex_diagnostics)?;

    let mut summary = CheckSummary {
        files: reports.len(),
        ..CheckSummary::default()
    };

    for report in &reports {
        let shown = report
            .items
            .iter()
            .filter(|d| d.code.map_or(true, |code| !allowed.contains(&code)));

        for diagnostic in shown {
            match diagnostic.level {
                Level::Error => summary.errors += 1,
                Level::Warning => summary.warnings += 1,
            }
            writeln!(out, "{}", render_diagnostic(&report.path, diagnostic))?;
        }
    }

    tracing::info!(
        "checked {} file(s): {} error(s), {} warning(s)",
        summary.files,
        summary.errors,
        summary.warnings
    );

    if summary.errors > 0 {
        return Err(SparrowtError::LexicalErrors(summary.errors));
    }
    Ok(summary)
}
