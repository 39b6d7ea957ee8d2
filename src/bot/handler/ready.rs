//! Ready event handlers for bot initialization.
//!
//! `ready` fires after the gateway handshake, before the guilds have streamed
//! in. `cache_ready` fires once the guilds listed in the ready payload are all
//! cached, which is when the connection is fully established. The broadcast
//! scheduler starts there so its first tick sees every guild.

use serenity::all::{Context, GuildId, Ready};
use std::sync::Arc;

use crate::scheduler::broadcast::BroadcastScheduler;
use crate::service::discord::{GuildGateway, SerenityGateway};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord (ID: {}), {} guild(s)",
        ready.user.name,
        ready.user.id,
        ready.guilds.len()
    );
}

/// Handles the cache ready event by starting the broadcast scheduler.
///
/// Fires again after every reconnect; the scheduler's start guard keeps a
/// single job running.
pub async fn handle_cache_ready(
    broadcaster: &BroadcastScheduler,
    ctx: Context,
    guilds: Vec<GuildId>,
) {
    tracing::debug!("Cache ready with {} guild(s)", guilds.len());

    let gateway: Arc<dyn GuildGateway> = Arc::new(SerenityGateway::from_context(&ctx));
    match broadcaster.start(gateway).await {
        Ok(true) => {}
        Ok(false) => tracing::debug!("Broadcast scheduler already running"),
        Err(e) => tracing::error!("Failed to start broadcast scheduler: {}", e),
    }
}
