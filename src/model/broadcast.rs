use serenity::all::GuildId;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BROADCAST_INTERVAL_HOURS: u64 = 1;
pub const DEFAULT_BROADCAST_CHANNEL_NAME: &str = "general-💬";
pub const DEFAULT_BROADCAST_MESSAGE: &str = "SKICKA IN I exposé-📸";

/// What to post, where, and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastPolicy {
    /// Hours between two broadcasts
    pub interval_hours: u64,
    /// Name of the text channel to post into in every guild
    pub channel_name: String,
    /// Plain-text message content
    pub message: String,
}

impl BroadcastPolicy {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_hours.saturating_mul(60 * 60))
    }
}

impl Default for BroadcastPolicy {
    fn default() -> Self {
        Self {
            interval_hours: DEFAULT_BROADCAST_INTERVAL_HOURS,
            channel_name: DEFAULT_BROADCAST_CHANNEL_NAME.to_string(),
            message: DEFAULT_BROADCAST_MESSAGE.to_string(),
        }
    }
}

/// Per-guild outcome of a single broadcast tick.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    /// Guilds the message was posted to
    pub sent: Vec<GuildId>,
    /// Guilds where posting failed
    pub failed: Vec<(GuildId, AppError)>,
    /// Guilds without a channel of the configured name
    pub missing_channel: Vec<GuildId>,
}
