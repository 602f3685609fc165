//! CLI entry point - the composition root.
//!
//! Configuration is read here (flags, environment, `.env`) and passed down
//! explicitly. Nothing below this file touches the environment.

use clap::Parser;

use anstruct_cli::{Cli, Commands, handlers};

/// Log to stderr, so `generate` output on stdout stays pipeable.
///
/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            host,
            port,
            api_key,
            model,
            upstream_url,
        } => {
            handlers::serve::execute(&host, port, api_key, model, upstream_url).await?;
        }
        Commands::Generate {
            prompt,
            endpoint,
            raw,
            out,
            timeout_secs,
        } => {
            handlers::generate::execute(&prompt, endpoint, raw, timeout_secs, out.as_deref())
                .await?;
        }
    }

    Ok(())
}
