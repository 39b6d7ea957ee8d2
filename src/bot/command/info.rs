use chrono::Utc;
use poise::serenity_prelude as serenity;
use serenity::{
    ChannelType, CreateEmbed, CreateEmbedFooter, Guild, GuildId, Mentionable, Member, Timestamp,
    UserId,
};

use crate::bot::command::Context;
use crate::error::AppError;
use crate::util::time::format_uptime;

const INFO_COLOR: u32 = 0x3498db;

/// Renders a timestamp with Discord's localized long date-time markup.
fn discord_time(timestamp: Timestamp) -> String {
    format!("<t:{}:F>", timestamp.unix_timestamp())
}

/// Builds the `/userinfo` embed for a guild member.
///
/// # Arguments
/// - `member` - Member to describe
///
/// # Returns
/// - `CreateEmbed` - Name, ID, account creation, join date and roles
pub fn build_userinfo_embed(member: &Member) -> CreateEmbed {
    let user = &member.user;

    let joined = member
        .joined_at
        .map(discord_time)
        .unwrap_or_else(|| "Unknown".to_string());

    let roles = if member.roles.is_empty() {
        "None".to_string()
    } else {
        member
            .roles
            .iter()
            .map(|role_id| role_id.mention().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    CreateEmbed::new()
        .title(format!("👤 {}", member.display_name()))
        .color(INFO_COLOR)
        .thumbnail(user.face())
        .field("Username", &user.name, true)
        .field("ID", user.id.to_string(), true)
        .field("Account created", discord_time(user.created_at()), false)
        .field("Joined server", joined, false)
        .field(format!("Roles ({})", member.roles.len()), roles, false)
}

/// Snapshot of the guild details shown by `/serverinfo`.
///
/// Taken from the cached guild so the cache guard is released before any
/// request is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSummary {
    pub id: GuildId,
    pub name: String,
    pub owner_id: UserId,
    pub member_count: u64,
    pub text_channels: usize,
    pub voice_channels: usize,
    /// Roles excluding `@everyone`
    pub roles: usize,
    pub icon_url: Option<String>,
}

impl ServerSummary {
    pub fn from_guild(guild: &Guild) -> Self {
        let count_kind = |kind: ChannelType| {
            guild
                .channels
                .values()
                .filter(|channel| channel.kind == kind)
                .count()
        };

        Self {
            id: guild.id,
            name: guild.name.clone(),
            owner_id: guild.owner_id,
            member_count: guild.member_count,
            text_channels: count_kind(ChannelType::Text),
            voice_channels: count_kind(ChannelType::Voice),
            roles: guild
                .roles
                .keys()
                .filter(|role_id| role_id.get() != guild.id.get())
                .count(),
            icon_url: guild.icon_url(),
        }
    }
}

/// Builds the `/serverinfo` embed from a guild snapshot.
pub fn build_serverinfo_embed(summary: &ServerSummary) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("🏠 {}", summary.name))
        .color(INFO_COLOR)
        .field("ID", summary.id.to_string(), true)
        .field("Owner", summary.owner_id.mention().to_string(), true)
        .field("Members", summary.member_count.to_string(), true)
        .field(
            "Channels",
            format!(
                "💬 {} text | 🔊 {} voice",
                summary.text_channels, summary.voice_channels
            ),
            true,
        )
        .field("Roles", summary.roles.to_string(), true)
        .field("Created", discord_time(summary.id.created_at()), false)
        .footer(CreateEmbedFooter::new(format!("Server ID: {}", summary.id)));

    if let Some(icon_url) = &summary.icon_url {
        embed = embed.thumbnail(icon_url);
    }

    embed
}

/// Shows information about a member
#[poise::command(slash_command, guild_only)]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "Member to look up (defaults to you)"] member: Option<serenity::Member>,
) -> Result<(), AppError> {
    let member = match member {
        Some(member) => member,
        None => ctx
            .author_member()
            .await
            .map(|member| member.into_owned())
            .ok_or_else(|| AppError::NotFound(format!("Member {}", ctx.author().id)))?,
    };

    ctx.send(poise::CreateReply::default().embed(build_userinfo_embed(&member)))
        .await?;
    Ok(())
}

/// Shows information about this server
#[poise::command(slash_command, guild_only)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), AppError> {
    let summary = {
        let guild = ctx
            .guild()
            .ok_or_else(|| AppError::NotFound("Guild is not cached".to_string()))?;
        ServerSummary::from_guild(&guild)
    };

    ctx.send(poise::CreateReply::default().embed(build_serverinfo_embed(&summary)))
        .await?;
    Ok(())
}

/// Shows a member's avatar
#[poise::command(slash_command, guild_only)]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "Member whose avatar to show (defaults to you)"] member: Option<
        serenity::Member,
    >,
) -> Result<(), AppError> {
    let user = member
        .map(|member| member.user)
        .unwrap_or_else(|| ctx.author().clone());

    let embed = CreateEmbed::new()
        .title(format!("🖼️ {}'s avatar", user.name))
        .color(INFO_COLOR)
        .image(user.face());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Shows how long the bot has been running
#[poise::command(slash_command)]
pub async fn uptime(ctx: Context<'_>) -> Result<(), AppError> {
    let uptime = format_uptime(Utc::now() - ctx.data().started_at);
    ctx.say(format!("⏱️ Uptime: **{}**", uptime)).await?;
    Ok(())
}
