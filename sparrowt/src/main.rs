//! Sparrowt CLI - developer driver for the sparrow lexer.
//!
//! This is the main entry point for the sparrowt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_first_number, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, SparrowtError};

/// Sparrowt - inspect how sparrow source code lexes
///
/// Prints token streams, reports lexical diagnostics, and runs the scanner
/// demo.
#[derive(Parser, Debug)]
#[command(name = "sparrowt")]
#[command(author = "Sparrow Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Developer driver for the sparrow lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SPARROWT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SPARROWT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SPARROWT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sparrowt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    Tokens(TokensCommand),

    /// Report lexical diagnostics
    ///
    /// Exits with a non-zero status when any error is reported.
    Check(CheckCommand),

    /// Find the first number in each line of text
    FirstNumber(FirstNumberCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to lex
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Include whitespace and comment tokens
    #[arg(short, long)]
    trivia: bool,

    /// Print token counts per kind
    #[arg(short, long)]
    stats: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Diagnostic code to suppress (repeatable)
    #[arg(short = 'A', long)]
    allow: Vec<String>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the first-number subcommand.
#[derive(Parser, Debug)]
struct FirstNumberCommand {
    /// Lines of text to scan (default: built-in samples)
    text: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system. Logs go to stderr so they never mix with
/// command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SparrowtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                input: args.input,
                format: args.format,
                trivia: args.trivia,
                stats: args.stats,
                jobs: args.jobs,
            };
            run_tokens(tokens_args, config, &mut out)
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                input: args.input,
                allow: args.allow,
                jobs: args.jobs,
            };
            run_check(check_args, config, &mut out).map(|_| ())
        },
        Commands::FirstNumber(args) => run_first_number(&args.text, &mut out),
    }
}
