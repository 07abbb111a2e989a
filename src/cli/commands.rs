//! CLI command implementations

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::storage::{load_seed, Customer};

use super::args::{CheckArgs, Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging();
    run_command(cli.into_command())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Check(args) => check(&args),
    }
}

/// Load the seed dataset and serve the API until stopped
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = args.resolve()?;

    let store = load_seed(config.data_path.as_deref())?;
    tracing::info!(
        records = store.len()?,
        source = %seed_source(config.data_path.as_deref()),
        "customer store loaded"
    );

    let server = HttpServer::with_config(config, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Verify the seed dataset and print a summary
pub fn check(args: &CheckArgs) -> CliResult<()> {
    let store = load_seed(args.data.as_deref())?;
    let records = store.scan()?;

    write_response(seed_summary(&records))
}

/// Record, city and company counts for a dataset
pub fn seed_summary(records: &[Customer]) -> Value {
    let cities: BTreeSet<&str> = records.iter().map(|c| c.city.as_str()).collect();
    let companies: BTreeSet<&str> = records.iter().map(|c| c.company.as_str()).collect();

    json!({
        "records": records.len(),
        "cities": cities.len(),
        "companies": companies.len(),
    })
}

fn seed_source(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "embedded".to_string(),
    }
}
