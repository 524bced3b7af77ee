//! Main entry point for the connectivity tester.
//!
//! This module initializes logging, loads environment variables, runs one
//! chat-completion probe against the selected provider and reports the
//! outcome as a single JSON line on stdout.
//!
//! The process exits 0 only when the probe succeeded; every failure path,
//! including a malformed invocation, exits 1.

mod cli;
mod constants;
mod errors;
mod llm;
mod report;
mod utils;

use clap::Parser;
use errors::Error;
use llm::LlmClient;
use report::ConnectionReport;
use tracing::debug;

/// Main entry point that runs a single connectivity probe.
///
/// # Steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging (stderr only)
/// 3. Load environment variables
/// 4. Run the probe and print its JSON report
#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level);

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let report = match (&cli.api_key, &cli.model) {
        (Some(api_key), Some(model)) => {
            run_probe(api_key, model, &cli.provider, cli.base_url.as_deref()).await
        }
        _ => ConnectionReport::failure(Error::InsufficientArguments),
    };

    report.print();
    std::process::exit(report.exit_code());
}

/// Builds the client and performs one probe, collapsing every failure into a
/// report with the error's display text.
async fn run_probe(
    api_key: &str,
    model: &str,
    provider: &str,
    base_url: Option<&str>,
) -> ConnectionReport {
    let client = match base_url {
        Some(url) => LlmClient::with_base_url(url, api_key, model),
        None => LlmClient::new(provider, api_key, model),
    };

    let client = match client {
        Ok(client) => client,
        Err(e) => return ConnectionReport::failure(e),
    };

    match client.probe().await {
        Ok(content) => ConnectionReport::success(content),
        Err(e) => ConnectionReport::failure(e),
    }
}
