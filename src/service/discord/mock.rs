//! In-memory [`GuildGateway`] for tests.
//!
//! Guilds, channels and roles are configured up front; every mutation is
//! recorded so tests can assert on what would have been sent to Discord.
//! Individual channels, guilds or role grants can be made to fail.

use serenity::all::{ChannelId, CreateMessage, GuildId, RoleId, UserId};
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::AppError;
use crate::model::channel::TextChannel;
use crate::service::discord::GuildGateway;

#[derive(Default)]
pub struct MockGateway {
    guilds: Vec<GuildId>,
    channels: HashMap<GuildId, Vec<TextChannel>>,
    roles: HashMap<(GuildId, String), RoleId>,
    failing_channels: HashSet<ChannelId>,
    failing_role_grants: bool,

    /// Messages sent, serialized the way Serenity would send them
    pub sent: Mutex<Vec<(ChannelId, serde_json::Value)>>,
    /// Permission overwrites successfully applied
    pub denied: Mutex<Vec<(ChannelId, RoleId)>>,
    /// Role grants successfully applied
    pub granted: Mutex<Vec<(GuildId, UserId, RoleId)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connected guild with the given text channels, in display order.
    pub fn with_guild(mut self, guild_id: u64, channels: Vec<TextChannel>) -> Self {
        let guild_id = GuildId::new(guild_id);
        self.guilds.push(guild_id);
        self.channels.insert(guild_id, channels);
        self
    }

    pub fn with_role(mut self, guild_id: u64, name: &str, role_id: u64) -> Self {
        self.roles
            .insert((GuildId::new(guild_id), name.to_string()), RoleId::new(role_id));
        self
    }

    /// Makes every send and permission change on this channel fail.
    pub fn failing_channel(mut self, channel_id: u64) -> Self {
        self.failing_channels.insert(ChannelId::new(channel_id));
        self
    }

    pub fn failing_role_grants(mut self) -> Self {
        self.failing_role_grants = true;
        self
    }

    pub fn sent_messages(&self) -> Vec<(ChannelId, serde_json::Value)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn denied_overwrites(&self) -> Vec<(ChannelId, RoleId)> {
        self.denied.lock().unwrap().clone()
    }

    pub fn granted_roles(&self) -> Vec<(GuildId, UserId, RoleId)> {
        self.granted.lock().unwrap().clone()
    }

    fn check_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        if self.failing_channels.contains(&channel_id) {
            return Err(AppError::NotFound(format!(
                "Missing access to channel {}",
                channel_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl GuildGateway for MockGateway {
    fn guild_ids(&self) -> Vec<GuildId> {
        self.guilds.clone()
    }

    fn text_channels(&self, guild_id: GuildId) -> Vec<TextChannel> {
        self.channels.get(&guild_id).cloned().unwrap_or_default()
    }

    fn find_role(&self, guild_id: GuildId, name: &str) -> Option<RoleId> {
        self.roles.get(&(guild_id, name.to_string())).copied()
    }

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        if self.failing_role_grants {
            return Err(AppError::NotFound(format!(
                "Missing permissions to grant role {}",
                role_id
            )));
        }
        self.granted.lock().unwrap().push((guild_id, user_id, role_id));
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), AppError> {
        self.check_channel(channel_id)?;
        let payload = serde_json::to_value(&message).unwrap();
        self.sent.lock().unwrap().push((channel_id, payload));
        Ok(())
    }

    async fn deny_send_messages(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.check_channel(channel_id)?;
        self.denied.lock().unwrap().push((channel_id, role_id));
        Ok(())
    }
}
