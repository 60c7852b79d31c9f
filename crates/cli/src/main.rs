use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use techlint::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute().await
}
