use chrono::Utc;
use serenity::all::{Context, EventHandler, GuildId, Member, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::scheduler::broadcast::BroadcastScheduler;
use crate::service::{discord::SerenityGateway, raid::JoinTracker};

pub mod member;
pub mod ready;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    /// Join history shared by every `guild_member_addition` event
    pub tracker: Arc<JoinTracker>,
    pub broadcaster: Arc<BroadcastScheduler>,
    pub auto_role_name: String,
}

impl Handler {
    pub fn new(
        tracker: Arc<JoinTracker>,
        broadcaster: Arc<BroadcastScheduler>,
        auto_role_name: String,
    ) -> Self {
        Self {
            tracker,
            broadcaster,
            auto_role_name,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called once every guild from the ready payload is in the cache
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.broadcaster, ctx, guilds).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let gateway = SerenityGateway::from_context(&ctx);
        member::handle_guild_member_addition(
            &gateway,
            &self.tracker,
            &self.auto_role_name,
            &new_member,
            Utc::now(),
        )
        .await;
    }
}
