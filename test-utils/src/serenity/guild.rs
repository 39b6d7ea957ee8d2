//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON, simulating what Discord's gateway
//! sends in a `GUILD_CREATE` payload. Channels and roles start empty; insert
//! fixtures from [`super::channel`] and [`super::role`] into the returned
//! guild's maps when a test needs them.

use serenity::all::Guild;

/// Creates a test Serenity Guild with customizable fields.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - Discord user ID of the guild owner
/// - `member_count` - Reported member count of the guild
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{guild::create_test_guild, channel::create_test_channel};
///
/// let mut guild = create_test_guild(123456789, "Test Guild", 100, 42);
/// let channel = create_test_channel(1, 123456789, "general", 0, 0);
/// guild.channels.insert(channel.id, channel);
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, owner_id: u64, member_count: u64) -> Guild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": member_count,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
