use chrono::{DateTime, Utc};
use serenity::all::Member;

use crate::model::raid::LockdownReport;
use crate::service::discord::GuildGateway;
use crate::service::raid::{lockdown::LockdownService, JoinTracker};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Grants the automatic role, then records the join and runs a lockdown if
/// the join pushed the guild's window to the raid threshold. A failed role
/// grant is logged and does not affect raid detection.
///
/// # Arguments
/// - `gateway` - Discord access for role, alert and permission calls
/// - `tracker` - Join history shared across events
/// - `auto_role_name` - Name of the role granted to new members
/// - `new_member` - The member who joined
/// - `joined_at` - When the join was observed
///
/// # Returns
/// - `Some(LockdownReport)` - This join triggered a lockdown
/// - `None` - No raid detected
pub async fn handle_guild_member_addition(
    gateway: &dyn GuildGateway,
    tracker: &JoinTracker,
    auto_role_name: &str,
    new_member: &Member,
    joined_at: DateTime<Utc>,
) -> Option<LockdownReport> {
    let guild_id = new_member.guild_id;
    let user = &new_member.user;

    match gateway.find_role(guild_id, auto_role_name) {
        Some(role_id) => match gateway.add_role(guild_id, user.id, role_id).await {
            Ok(()) => tracing::info!(
                "Granted role \"{}\" to {} in guild {}",
                auto_role_name,
                user.name,
                guild_id
            ),
            Err(e) => tracing::error!(
                "Failed to grant role \"{}\" to {} ({}) in guild {}: {}",
                auto_role_name,
                user.name,
                user.id,
                guild_id,
                e
            ),
        },
        None => tracing::debug!(
            "Guild {} has no role named \"{}\", skipping auto-role",
            guild_id,
            auto_role_name
        ),
    }

    if !tracker.record_and_check(guild_id, joined_at) {
        return None;
    }

    let report = LockdownService::new(gateway, tracker.policy())
        .lock_down(guild_id, user, joined_at)
        .await;

    Some(report)
}
