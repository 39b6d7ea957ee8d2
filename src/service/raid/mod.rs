//! Raid detection and lockdown.
//!
//! [`JoinTracker`] keeps a sliding window of recent join timestamps per guild
//! and decides whether the window holds enough joins to count as a raid. The
//! [`lockdown`] module acts on that decision by alerting moderators and
//! revoking `@everyone`'s permission to send messages.
//!
//! Stale timestamps are pruned lazily whenever a guild's window is evaluated;
//! there is no background sweep. The tracker lives for the process lifetime
//! and is shared with the event handler through an `Arc`.

pub mod lockdown;

#[cfg(test)]
mod test;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serenity::all::GuildId;
use std::collections::VecDeque;

use crate::model::raid::RaidPolicy;

/// Per-guild sliding window of member join timestamps.
///
/// Uses `DashMap` so concurrent join events of different guilds do not
/// contend, while joins of the same guild are serialized on their entry.
pub struct JoinTracker {
    /// Threshold and window applied to every guild
    policy: RaidPolicy,
    /// Join timestamps by guild, oldest first
    joins: DashMap<GuildId, VecDeque<DateTime<Utc>>>,
}

impl JoinTracker {
    pub fn new(policy: RaidPolicy) -> Self {
        Self {
            policy,
            joins: DashMap::new(),
        }
    }

    pub fn policy(&self) -> &RaidPolicy {
        &self.policy
    }

    /// Appends a join timestamp to the guild's window.
    pub fn record_join(&self, guild_id: GuildId, joined_at: DateTime<Utc>) {
        self.joins.entry(guild_id).or_default().push_back(joined_at);
    }

    /// Removes every join of the guild for which `now - joined_at >= window`.
    pub fn prune(&self, guild_id: GuildId, now: DateTime<Utc>) {
        if let Some(mut joins) = self.joins.get_mut(&guild_id) {
            prune_window(&mut joins, now, self.policy.window());
        }
    }

    /// Prunes the guild's window, then checks it against the join threshold.
    ///
    /// # Returns
    /// - `true` - At least `join_threshold` joins happened within the window
    /// - `false` - Fewer joins, or none recorded for this guild
    pub fn is_raid(&self, guild_id: GuildId, now: DateTime<Utc>) -> bool {
        match self.joins.get_mut(&guild_id) {
            Some(mut joins) => {
                prune_window(&mut joins, now, self.policy.window());
                joins.len() >= self.policy.join_threshold
            }
            None => false,
        }
    }

    /// Records a join and evaluates the window in one step.
    ///
    /// The guild's entry stays locked between the append and the evaluation,
    /// so two concurrent joins can never both observe a stale count.
    pub fn record_and_check(&self, guild_id: GuildId, joined_at: DateTime<Utc>) -> bool {
        let mut joins = self.joins.entry(guild_id).or_default();
        joins.push_back(joined_at);
        prune_window(&mut joins, joined_at, self.policy.window());
        joins.len() >= self.policy.join_threshold
    }

    /// Number of joins currently stored for the guild, without pruning.
    pub fn recent_joins(&self, guild_id: GuildId) -> usize {
        self.joins.get(&guild_id).map_or(0, |joins| joins.len())
    }
}

fn prune_window(joins: &mut VecDeque<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) {
    joins.retain(|joined_at| now.signed_duration_since(*joined_at) < window);
}
