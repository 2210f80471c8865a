//! Command modules for the sparrowt CLI.
//!
//! Each subcommand is implemented in its own file and writes its output to
//! a caller-supplied writer.

pub mod common;

pub mod check;
pub mod first_number;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use first_number::run_first_number;
pub use tokens::{run_tokens, TokensArgs};
