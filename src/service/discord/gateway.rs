use serenity::all::{
    ChannelId, ChannelType, Context, CreateMessage, GuildChannel, GuildId, RoleId, UserId,
};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;
use crate::model::channel::TextChannel;
use crate::service::discord::permission::send_messages_overwrite;

/// Audit log reason attached to automatic role grants.
const AUTO_ROLE_REASON: &str = "Automatic role for new members";

/// Discord operations used by the raid and broadcast services.
///
/// Lookups read the gateway cache and never fail; they return empty results
/// when the guild is not cached. Mutations go over HTTP and return the error
/// instead of logging it, leaving the logging policy to the caller.
#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// Guilds the bot is currently connected to.
    fn guild_ids(&self) -> Vec<GuildId>;

    /// Text and announcement channels of a guild in display order (position, then ID).
    fn text_channels(&self, guild_id: GuildId) -> Vec<TextChannel>;

    /// First role of the guild with exactly this name.
    fn find_role(&self, guild_id: GuildId, name: &str) -> Option<RoleId>;

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), AppError>;

    /// Denies `SEND_MESSAGES` for `role_id` through a channel permission overwrite.
    async fn deny_send_messages(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<(), AppError>;
}

/// [`GuildGateway`] backed by Serenity's cache and HTTP client.
#[derive(Clone)]
pub struct SerenityGateway {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.cache.clone(), ctx.http.clone())
    }
}

#[async_trait]
impl GuildGateway for SerenityGateway {
    fn guild_ids(&self) -> Vec<GuildId> {
        self.cache.guilds()
    }

    fn text_channels(&self, guild_id: GuildId) -> Vec<TextChannel> {
        match self.cache.guild(guild_id) {
            Some(guild) => sorted_text_channels(guild.channels.values()),
            None => {
                tracing::debug!("Guild {} is not cached, no text channels", guild_id);
                Vec::new()
            }
        }
    }

    fn find_role(&self, guild_id: GuildId, name: &str) -> Option<RoleId> {
        let guild = self.cache.guild(guild_id)?;
        let role_id = guild
            .roles
            .values()
            .find(|role| role.name == name)
            .map(|role| role.id);
        role_id
    }

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(AUTO_ROLE_REASON))
            .await?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), AppError> {
        channel_id
            .send_message((&self.cache, self.http.as_ref()), message)
            .await?;

        Ok(())
    }

    async fn deny_send_messages(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        channel_id
            .create_permission(self.http.as_ref(), send_messages_overwrite(role_id, false))
            .await?;

        Ok(())
    }
}

/// Filters guild channels down to text and announcement channels, ordered as
/// Discord displays them.
pub fn sorted_text_channels<'a>(
    channels: impl IntoIterator<Item = &'a GuildChannel>,
) -> Vec<TextChannel> {
    let mut text: Vec<&GuildChannel> = channels
        .into_iter()
        .filter(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News))
        .collect();
    text.sort_by_key(|channel| (channel.position, channel.id));

    text.into_iter()
        .map(|channel| TextChannel {
            id: channel.id,
            name: channel.name.clone(),
        })
        .collect()
}
