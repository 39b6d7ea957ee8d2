//! Slash-command surface.
//!
//! Every command is a stateless poise handler: it validates its typed
//! arguments, performs at most one cluster of Discord API calls and sends
//! exactly one reply. Permission checks are delegated to poise's
//! `required_permissions`, which Discord evaluates against the invoking user.
//! Errors propagate with `?` into [`on_error`], which logs them and answers the
//! user with a generic failure message.
//!
//! - `fun` - Greetings, latency and games of chance
//! - `moderation` - Kick, ban, purge, channel locks and warnings
//! - `info` - User, server, avatar and uptime lookups

pub mod fun;
pub mod info;
pub mod moderation;

#[cfg(test)]
mod test;

use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

use crate::error::AppError;

/// Data shared with every command invocation.
pub struct Data {
    /// Captured once when the bot is built, read by `/uptime`
    pub started_at: DateTime<Utc>,
}

impl Data {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

/// All slash commands registered by the bot.
pub fn commands() -> Vec<poise::Command<Data, AppError>> {
    vec![
        fun::hej(),
        fun::ping(),
        fun::dice(),
        fun::coinflip(),
        fun::joke(),
        moderation::kick(),
        moderation::ban(),
        moderation::unban(),
        moderation::clear(),
        moderation::lock(),
        moderation::unlock(),
        moderation::warn(),
        info::userinfo(),
        info::serverinfo(),
        info::avatar(),
        info::uptime(),
    ]
}

/// Returns the guild of a `guild_only` command.
pub fn require_guild(ctx: Context<'_>) -> Result<serenity::GuildId, AppError> {
    ctx.guild_id()
        .ok_or_else(|| AppError::NotFound("This command can only be used in a server".to_string()))
}

/// Handles errors raised by commands and by the framework itself.
pub async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                "Command /{} failed for {} in guild {:?}: {}",
                ctx.command().name,
                ctx.author().name,
                ctx.guild_id(),
                error
            );

            if let Err(e) = ctx
                .say("❌ Something went wrong while running this command.")
                .await
            {
                tracing::error!("Failed to report command error to user: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Failed to handle framework error: {}", e);
            }
        }
    }
}
