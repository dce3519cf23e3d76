//! issue-status - sync issue status labels from CI events

mod cli;

use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so its values act as flag fallbacks
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();
    cli::init_tracing();

    match cli::run_sync(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "issue status sync could not start");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
