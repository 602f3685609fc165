//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the anstruct blueprint gateway.
#[derive(Parser)]
#[command(name = "anstruct-proxy")]
#[command(about = "Forward anstruct prompts to Gemini and return project blueprints")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
