//! Axum HTTP server for the forwarding gateway.
//!
//! The gateway is mounted as the router fallback, so every path and every
//! method lands in the same handler. Method checking is the gateway's job.
//!
//! The body is read without a size limit, and only for POST, so a large
//! prompt is forwarded and a large non-POST body still gets a 405.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::Gateway;

/// Shared application state for the gateway server.
#[derive(Clone)]
struct AppState {
    gateway: Arc<Gateway>,
}

/// Build the gateway router.
pub fn router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .fallback(forward_prompt)
        .with_state(AppState { gateway })
}

/// Run the gateway on a pre-bound listener until `cancel` fires.
///
/// Returns `Ok(())` on clean shutdown, or an error if the server fails.
pub async fn serve(
    listener: TcpListener,
    gateway: Arc<Gateway>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Gateway listening on {addr}");
    info!("Point anstruct at: http://{addr}/generate");

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("Gateway shut down");
    Ok(())
}

async fn forward_prompt(State(state): State<AppState>, method: Method, body: Body) -> Response {
    debug!(%method, "Inbound request");

    let result = match read_body(&method, body).await {
        Ok(body) => state.gateway.handle(&method, &body).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            if e.is_unexpected() {
                error!("Gateway error: {e}");
            }
            e.into_response()
        }
    }
}

/// Collect the whole body of a POST. Other methods are answered without
/// reading it.
async fn read_body(method: &Method, body: Body) -> GatewayResult<Bytes> {
    if *method != Method::POST {
        return Ok(Bytes::new());
    }
    to_bytes(body, usize::MAX)
        .await
        .map_err(GatewayError::BodyRead)
}
