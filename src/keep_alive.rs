//! HTTP keep-alive endpoint.
//!
//! Some hosting platforms idle a process that receives no inbound traffic. When
//! `KEEP_ALIVE_ADDR` is configured, this serves `GET /` so an external uptime
//! pinger can keep the bot awake. It is not part of the bot's functionality and
//! a failure here never stops the bot.

use axum::{routing::get, Router};

use crate::error::AppError;

/// Handler for GET / - plain-text liveness message.
async fn alive() -> &'static str {
    "Bot is alive!"
}

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Serves the keep-alive endpoint until the listener fails.
///
/// # Arguments
/// - `addr` - Socket address to bind, e.g. `0.0.0.0:8080`
///
/// # Returns
/// - `Err(AppError::IoErr)` - Binding or serving failed
pub async fn serve(addr: &str) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Keep-alive endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, router()).await?;

    Ok(())
}
