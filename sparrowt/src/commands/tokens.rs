//! Tokens command implementation.
//!
//! Prints the token stream of each input file, as `kind("text")` lines or
//! as JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use sparrow_lex::Lexer;

use crate::commands::common::{process_files, FileReport, KindStats, OutputFormat, TokenRecord};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to lex.
    pub input: Vec<PathBuf>,
    /// Output format; falls back to the configuration.
    pub format: Option<String>,
    /// Include whitespace and comments.
    pub trivia: bool,
    /// Print per-kind counts after the listing.
    pub stats: bool,
    /// Number of parallel jobs; falls back to the configuration.
    pub jobs: Option<usize>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: String,
    tokens: &'a [TokenRecord],
}

/// Lexes every input and writes the listing to `out`.
pub fn run_tokens(args: TokensArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let format = OutputFormat::parse(args.format.as_deref().unwrap_or(&config.tokens.format))?;
    let trivia = args.trivia || config.tokens.trivia;
    let jobs = args.jobs.unwrap_or(config.jobs);

    let reports = process_files(&args.input, jobs, |source| {
        Lexer::new(source)
            .retain_trivia(trivia)
            .map(|token| TokenRecord::from(&token))
            .collect()
    })?;

    match format {
        OutputFormat::Text => write_text(&reports, out)?,
        OutputFormat::Json => write_json(&reports, out)?,
    }

    if args.stats {
        write_stats(&reports, out)?;
    }

    Ok(())
}

fn write_text(reports: &[FileReport<TokenRecord>], out: &mut impl Write) -> Result<()> {
    let show_headers = reports.len() > 1;

    for report in reports {
        if show_headers {
            writeln!(out, "==> {} <==", report.path.display())?;
        }
        for record in &report.items {
            writeln!(out, "{}({:?})", record.kind, record.text)?;
        }
    }

    Ok(())
}

fn write_json(reports: &[FileReport<TokenRecord>], out: &mut impl Write) -> Result<()> {
    let files: Vec<_> = reports
        .iter()
        .map(|report| JsonFile {
            file: report.path.display().to_string(),
            tokens: &report.items,
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &files)?;
    writeln!(out)?;
    Ok(())
}

fn write_stats(reports: &[FileReport<TokenRecord>], out: &mut impl Write) -> Result<()> {
    let mut stats = KindStats::default();
    for record in reports.iter().flat_map(|r| &r.items) {
        stats.record(record.kind);
    }

    writeln!(out, "{} tokens", stats.total())?;
    for (kind, count) in stats.sorted() {
        writeln!(out, "{:>8}  {}", count, kind)?;
    }
    Ok(())
}
