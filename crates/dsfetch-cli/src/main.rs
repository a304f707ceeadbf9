//! CLI entry point - the composition root.
//!
//! The run is strictly linear with two abort points: credentials first, then
//! the download itself. Everything else (logging, .env loading, argument
//! parsing) is ambient setup.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dsfetch_core::CredentialsStatus;

mod fetch;
mod parser;

use parser::Cli;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default level, RUST_LOG wins
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    println!("🚀 Starting Kaggle dataset download...");

    // Establish credentials before anything touches the network
    match dsfetch_core::ensure_credentials() {
        Ok(CredentialsStatus::Existing(_)) => {
            println!("Kaggle credentials already exist");
        }
        Ok(CredentialsStatus::Created(_)) => {
            println!("Kaggle credentials created successfully");
        }
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }

    // Download and extract the dataset
    match fetch::execute().await {
        Ok(path) => {
            println!("✅ Dataset downloaded to: {}", path.display());
        }
        Err(e) => {
            eprintln!("❌ Failed to download dataset: {e}");
            std::process::exit(1);
        }
    }
}
