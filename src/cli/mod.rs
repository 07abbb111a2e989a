//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load the seed dataset and start the HTTP API (default)
//! - check: Verify a seed dataset and print a summary

mod args;
mod commands;
mod errors;
mod io;

pub use args::{CheckArgs, Cli, Command, ServeArgs};
pub use commands::{check, run, run_command, seed_summary, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{response_envelope, write_json, write_response};
