//! Lockdown of a guild under a raid.
//!
//! A lockdown posts a raid alert for moderators and then revokes `@everyone`'s
//! `SEND_MESSAGES` permission in every text channel. Each step is independent:
//! a failed alert does not prevent the sweep, and a channel that cannot be
//! locked does not stop the remaining channels. Nothing is retried or rolled
//! back; the outcome of every step is logged and returned in a
//! [`LockdownReport`].
//!
//! There is no "already locked" flag. Every join that keeps the window at or
//! above the threshold runs the full sweep again, which re-applies the same
//! overwrite to channels that are already locked.

use chrono::{DateTime, Utc};
use serenity::all::{
    CreateEmbed, CreateEmbedFooter, CreateMessage, GuildId, Mentionable, Timestamp, User,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        channel::TextChannel,
        raid::{AlertOutcome, LockdownReport, RaidPolicy},
    },
    service::discord::{permission::everyone_role, GuildGateway},
};

/// Name of the channel preferred for raid alerts.
pub const ALERT_CHANNEL_NAME: &str = "admin";

/// Red embed color used for raid alerts.
const ALERT_COLOR: u32 = 0xe74c3c;

/// Service running lockdowns against a guild through a [`GuildGateway`].
pub struct LockdownService<'a> {
    gateway: &'a dyn GuildGateway,
    policy: &'a RaidPolicy,
}

impl<'a> LockdownService<'a> {
    pub fn new(gateway: &'a dyn GuildGateway, policy: &'a RaidPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Alerts moderators and locks every text channel of the guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild under attack
    /// - `trigger` - Member whose join tripped the threshold
    /// - `detected_at` - Time of that join, shown on the alert
    ///
    /// # Returns
    /// - `LockdownReport` - Alert outcome plus locked and failed channels
    pub async fn lock_down(
        &self,
        guild_id: GuildId,
        trigger: &User,
        detected_at: DateTime<Utc>,
    ) -> LockdownReport {
        let channels = self.gateway.text_channels(guild_id);

        let alert = self
            .send_alert(guild_id, &channels, trigger, detected_at)
            .await;
        let mut report = LockdownReport::new(alert);

        let everyone = everyone_role(guild_id);
        for channel in &channels {
            match self.gateway.deny_send_messages(channel.id, everyone).await {
                Ok(()) => report.locked.push(channel.id),
                Err(e) => {
                    tracing::error!(
                        "Failed to lock #{} ({}) in guild {}: {}",
                        channel.name,
                        channel.id,
                        guild_id,
                        e
                    );
                    report.failed.push((channel.id, e));
                }
            }
        }

        tracing::warn!(
            "Raid detected in guild {} (triggered by {} / {}): locked {} of {} text channels",
            guild_id,
            trigger.name,
            trigger.id,
            report.locked.len(),
            report.attempted()
        );

        report
    }

    async fn send_alert(
        &self,
        guild_id: GuildId,
        channels: &[TextChannel],
        trigger: &User,
        detected_at: DateTime<Utc>,
    ) -> AlertOutcome {
        let Some(channel) = select_alert_channel(channels) else {
            tracing::debug!("Guild {} has no text channel for raid alerts", guild_id);
            return AlertOutcome::Skipped;
        };

        let result = match build_alert_embed(self.policy, trigger, detected_at) {
            Ok(embed) => {
                self.gateway
                    .send_message(channel.id, CreateMessage::new().embed(embed))
                    .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => AlertOutcome::Sent(channel.id),
            Err(e) => {
                tracing::error!(
                    "Failed to send raid alert to #{} ({}) in guild {}: {}",
                    channel.name,
                    channel.id,
                    guild_id,
                    e
                );
                AlertOutcome::Failed(channel.id, e)
            }
        }
    }
}

/// Picks the channel named `admin`, falling back to the first text channel.
pub fn select_alert_channel(channels: &[TextChannel]) -> Option<&TextChannel> {
    channels
        .iter()
        .find(|channel| channel.name == ALERT_CHANNEL_NAME)
        .or_else(|| channels.first())
}

/// Builds the raid alert embed.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Alert with policy values, triggering member and timestamp
/// - `Err(AppError::InternalErr)` - `detected_at` is outside Discord's timestamp range
pub fn build_alert_embed(
    policy: &RaidPolicy,
    trigger: &User,
    detected_at: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let timestamp = Timestamp::from_unix_timestamp(detected_at.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: detected_at.timestamp(),
            reason: e.to_string(),
        }
    })?;

    Ok(CreateEmbed::new()
        .title("🚨 RAID WARNING 🚨")
        .description(format!(
            "**{}+ members** joined within {} seconds!",
            policy.join_threshold, policy.window_seconds
        ))
        .color(ALERT_COLOR)
        .field(
            "Latest member",
            format!("{} ({})", trigger.mention(), trigger.name),
            false,
        )
        .footer(CreateEmbedFooter::new("Anti-Raid System"))
        .timestamp(timestamp))
}
