// cli/src/main.rs

// Entry point for the intake CLI: sets up logging and hands over to the
// command dispatcher.

use anyhow::Result;
use intake_cli::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG=debug shows cache hits/misses and fetches
    env_logger::init();

    start_cli().await
}
