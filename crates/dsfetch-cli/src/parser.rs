//! Main CLI parser.
//!
//! The tool takes no operational arguments: the dataset and the output
//! location are compiled in or come from the environment. Only ambient
//! flags are exposed.

use clap::Parser;

/// Command-line interface definition for the dataset fetcher.
#[derive(Parser)]
#[command(name = "dsfetch")]
#[command(about = "Download and extract the ManVue fashion dataset from Kaggle")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
