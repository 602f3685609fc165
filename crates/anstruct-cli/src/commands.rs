//! Subcommands for the gateway binary.

use std::path::PathBuf;

use clap::Subcommand;

use anstruct_gateway::client::DEFAULT_ENDPOINT;
use anstruct_gateway::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the forwarding gateway in front of the Gemini API
    Serve {
        /// Host to bind to
        #[arg(long, env = "ANSTRUCT_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to bind the gateway to
        #[arg(short, long, env = "ANSTRUCT_PORT", default_value = "8787")]
        port: u16,
        /// Gemini API key
        #[arg(long, env = "GEMINI_KEY", hide_env_values = true)]
        api_key: String,
        /// Gemini model used for generation
        #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
        model: String,
        /// Base URL of the Gemini API
        #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
        upstream_url: String,
    },

    /// Ask a gateway for a project blueprint and print or save it
    Generate {
        /// Natural-language description of the project
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        /// Gateway endpoint to call
        #[arg(long, env = "ANSTRUCT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        /// Print the gateway output without cleaning or checking it
        #[arg(long)]
        raw: bool,
        /// Write the blueprint to this .struct file or folder instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
}
