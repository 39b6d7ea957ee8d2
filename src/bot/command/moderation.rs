use poise::serenity_prelude as serenity;
use serenity::Mentionable;

use crate::bot::command::{require_guild, Context};
use crate::error::AppError;
use crate::service::discord::permission::{everyone_role, send_messages_overwrite};
use crate::util::parse::parse_user_id;

const NO_REASON: &str = "No reason given";

/// Resolves an optional reason, substituting a placeholder when blank.
pub fn reason_or_default(reason: Option<String>) -> String {
    reason
        .map(|reason| reason.trim().to_string())
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| NO_REASON.to_string())
}

/// Kicks a member from the server
#[poise::command(slash_command, guild_only, required_permissions = "KICK_MEMBERS")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Member to kick"] member: serenity::Member,
    #[description = "Reason for the kick"] reason: Option<String>,
) -> Result<(), AppError> {
    let reason = reason_or_default(reason);

    member.kick_with_reason(ctx, &reason).await?;

    tracing::info!(
        "{} kicked {} ({}) from guild {}: {}",
        ctx.author().name,
        member.user.name,
        member.user.id,
        member.guild_id,
        reason
    );
    ctx.say(format!(
        "👢 {} has been kicked. Reason: {}",
        member.user.name, reason
    ))
    .await?;
    Ok(())
}

/// Bans a member from the server
#[poise::command(slash_command, guild_only, required_permissions = "BAN_MEMBERS")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "Member to ban"] member: serenity::Member,
    #[description = "Reason for the ban"] reason: Option<String>,
) -> Result<(), AppError> {
    let reason = reason_or_default(reason);

    member.ban_with_reason(ctx, 0, &reason).await?;

    tracing::info!(
        "{} banned {} ({}) from guild {}: {}",
        ctx.author().name,
        member.user.name,
        member.user.id,
        member.guild_id,
        reason
    );
    ctx.say(format!(
        "🔨 {} has been banned. Reason: {}",
        member.user.name, reason
    ))
    .await?;
    Ok(())
}

/// Lifts the ban of a user
#[poise::command(slash_command, guild_only, required_permissions = "BAN_MEMBERS")]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "ID of the user to unban"] user_id: String,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let user_id = match parse_user_id(&user_id) {
        Ok(user_id) => user_id,
        Err(e) => {
            ctx.say(format!("❌ {}", e)).await?;
            return Ok(());
        }
    };

    let user = user_id.to_user(ctx).await?;
    guild_id.unban(ctx.http(), user_id).await?;

    tracing::info!(
        "{} unbanned {} ({}) in guild {}",
        ctx.author().name,
        user.name,
        user.id,
        guild_id
    );
    ctx.say(format!("✅ {} has been unbanned.", user.name)).await?;
    Ok(())
}

/// Deletes recent messages in this channel
#[poise::command(
    slash_command,
    guild_only,
    ephemeral,
    required_permissions = "MANAGE_MESSAGES"
)]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Number of messages to delete (1-100)"]
    #[min = 1]
    #[max = 100]
    amount: u8,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let messages = ctx
        .channel_id()
        .messages(ctx, serenity::GetMessages::new().limit(amount))
        .await?;
    let message_ids: Vec<serenity::MessageId> = messages.iter().map(|message| message.id).collect();

    if !message_ids.is_empty() {
        ctx.channel_id()
            .delete_messages(ctx.http(), &message_ids)
            .await?;
    }

    tracing::info!(
        "{} cleared {} message(s) in channel {}",
        ctx.author().name,
        message_ids.len(),
        ctx.channel_id()
    );
    ctx.say(format!("🧹 Deleted {} message(s).", message_ids.len()))
        .await?;
    Ok(())
}

/// Stops @everyone from sending messages in this channel
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_CHANNELS")]
pub async fn lock(ctx: Context<'_>) -> Result<(), AppError> {
    set_channel_lock(ctx, true).await?;
    ctx.say("🔒 This channel is now locked.").await?;
    Ok(())
}

/// Lets @everyone send messages in this channel again
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_CHANNELS")]
pub async fn unlock(ctx: Context<'_>) -> Result<(), AppError> {
    set_channel_lock(ctx, false).await?;
    ctx.say("🔓 This channel is now unlocked.").await?;
    Ok(())
}

async fn set_channel_lock(ctx: Context<'_>, locked: bool) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let overwrite = send_messages_overwrite(everyone_role(guild_id), !locked);

    ctx.channel_id().create_permission(ctx.http(), overwrite).await?;

    tracing::info!(
        "{} {} channel {} in guild {}",
        ctx.author().name,
        if locked { "locked" } else { "unlocked" },
        ctx.channel_id(),
        guild_id
    );
    Ok(())
}

/// Warns a member
#[poise::command(slash_command, guild_only, required_permissions = "KICK_MEMBERS")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "Member to warn"] member: serenity::Member,
    #[description = "Reason for the warning"] reason: Option<String>,
) -> Result<(), AppError> {
    let reason = reason_or_default(reason);
    let guild_name = ctx
        .guild()
        .map(|guild| guild.name.clone())
        .unwrap_or_else(|| "the server".to_string());

    let dm = serenity::CreateMessage::new().content(format!(
        "⚠️ You have been warned in **{}**. Reason: {}",
        guild_name, reason
    ));
    // Members commonly block DMs from server members.
    if let Err(e) = member.user.direct_message(ctx, dm).await {
        tracing::debug!("Could not DM warning to {}: {}", member.user.id, e);
    }

    tracing::info!(
        "{} warned {} ({}) in guild {}: {}",
        ctx.author().name,
        member.user.name,
        member.user.id,
        member.guild_id,
        reason
    );
    ctx.say(format!(
        "⚠️ {} has been warned. Reason: {}",
        member.mention(),
        reason
    ))
    .await?;
    Ok(())
}
