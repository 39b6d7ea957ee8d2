use chrono::Duration;
use serenity::all::ChannelId;

use crate::error::AppError;

/// Default length of the sliding join window in seconds.
pub const DEFAULT_RAID_WINDOW_SECONDS: u64 = 60;
/// Default number of joins within the window that counts as a raid.
pub const DEFAULT_RAID_JOIN_THRESHOLD: usize = 5;

/// Threshold/window policy used to decide whether a burst of joins is a raid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaidPolicy {
    /// Length of the sliding window in seconds
    pub window_seconds: u64,
    /// Joins within the window required to trigger a lockdown
    pub join_threshold: usize,
}

impl RaidPolicy {
    pub fn new(window_seconds: u64, join_threshold: usize) -> Self {
        Self {
            window_seconds,
            join_threshold,
        }
    }

    /// Returns the window as a chrono duration for timestamp arithmetic.
    pub fn window(&self) -> Duration {
        i64::try_from(self.window_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for RaidPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RAID_WINDOW_SECONDS, DEFAULT_RAID_JOIN_THRESHOLD)
    }
}

/// Outcome of the alert step of a lockdown.
#[derive(Debug)]
pub enum AlertOutcome {
    /// The alert embed was posted to this channel.
    Sent(ChannelId),
    /// Posting the alert to this channel failed.
    Failed(ChannelId, AppError),
    /// The guild has no text channel to post the alert to.
    Skipped,
}

/// Outcome of one lockdown run against a guild.
#[derive(Debug)]
pub struct LockdownReport {
    /// What happened to the raid alert
    pub alert: AlertOutcome,
    /// Channels where `@everyone` can no longer send messages
    pub locked: Vec<ChannelId>,
    /// Channels where revoking the permission failed, with the error
    pub failed: Vec<(ChannelId, AppError)>,
}

impl LockdownReport {
    pub fn new(alert: AlertOutcome) -> Self {
        Self {
            alert,
            locked: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Number of channels the sweep attempted.
    pub fn attempted(&self) -> usize {
        self.locked.len() + self.failed.len()
    }
}
