//! Serve command handler.

use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use anstruct_gateway::{Gateway, GatewayConfig, ReqwestUpstream, serve};

/// Run the gateway until Ctrl-C.
pub async fn execute(
    host: &str,
    port: u16,
    api_key: String,
    model: String,
    upstream_url: String,
) -> Result<()> {
    let config = GatewayConfig::new(api_key)
        .with_model(model)
        .with_base_url(upstream_url);
    info!(model = %config.model(), upstream = %config.generate_content_url(), "Gateway configured");

    let upstream = ReqwestUpstream::new(config)?;
    let gateway = Arc::new(Gateway::new(Arc::new(upstream)));

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_signal(tokio::signal::ctrl_c(), cancel.clone()));

    serve(listener, gateway, cancel).await
}

/// Cancel `token` once `signal` fires.
///
/// If the signal listener cannot be installed the token is left alone and
/// the gateway keeps serving.
async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Ctrl-C received, shutting down");
            token.cancel();
        }
        Err(e) => warn!("Failed to listen for Ctrl-C, gateway keeps running: {e}"),
    }
}
