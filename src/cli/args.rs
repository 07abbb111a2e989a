//! CLI argument definitions using clap
//!
//! Commands:
//! - customer-directory [serve] [--config <path>] [--host <host>] [--port <port>] [--data <path>]
//! - customer-directory check [--data <path>]
//!
//! With no subcommand the server starts, reading `PORT` and
//! `CUSTOMERS_DATA` from the environment.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Customer directory - search, list and add customer records over HTTP
#[derive(Parser, Debug)]
#[command(name = "customer-directory")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve(ServeArgs),

    /// Load and verify the seed dataset, print a summary and exit
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Seed dataset (JSON array of customers); defaults to the bundled one
    #[arg(long, env = "CUSTOMERS_DATA")]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Seed dataset to verify; defaults to the bundled one
    #[arg(long, env = "CUSTOMERS_DATA")]
    pub data: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run, falling back to `serve` with top-level flags
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

impl ServeArgs {
    /// Resolve the server configuration.
    ///
    /// Precedence, lowest first: defaults, config file, flags/environment.
    pub fn resolve(&self) -> CliResult<HttpServerConfig> {
        let mut config = match &self.config {
            Some(path) => HttpServerConfig::load(path).map_err(CliError::config_error)?,
            None => HttpServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data) = &self.data {
            config.data_path = Some(data.clone());
        }

        Ok(config)
    }
}
