use std::fmt;
use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};
use crate::model::{
    broadcast::{
        BroadcastPolicy, DEFAULT_BROADCAST_CHANNEL_NAME, DEFAULT_BROADCAST_INTERVAL_HOURS,
        DEFAULT_BROADCAST_MESSAGE,
    },
    raid::{RaidPolicy, DEFAULT_RAID_JOIN_THRESHOLD, DEFAULT_RAID_WINDOW_SECONDS},
};

pub const DEFAULT_AUTO_ROLE_NAME: &str = "Member";

/// Longest accepted broadcast interval, one year.
pub const MAX_BROADCAST_INTERVAL_HOURS: u64 = 24 * 365;

pub struct Config {
    pub discord_bot_token: String,

    /// Role granted to every member on join
    pub auto_role_name: String,
    pub raid: RaidPolicy,
    pub broadcast: BroadcastPolicy,

    /// Address for the HTTP keep-alive endpoint, disabled when unset
    pub keep_alive_addr: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Only `DISCORD_BOT_TOKEN` is required; every other value falls back to
    /// its default when the variable is unset or blank.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - Token is unset or blank
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A numeric value is unparsable, zero
    ///   or above its maximum
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_bot_token = var("DISCORD_BOT_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let raid = RaidPolicy::new(
            parse_positive("RAID_WINDOW_SECONDS", var("RAID_WINDOW_SECONDS"), DEFAULT_RAID_WINDOW_SECONDS)?,
            parse_positive("RAID_JOIN_THRESHOLD", var("RAID_JOIN_THRESHOLD"), DEFAULT_RAID_JOIN_THRESHOLD)?,
        );

        let broadcast = BroadcastPolicy {
            interval_hours: parse_bounded(
                "BROADCAST_INTERVAL_HOURS",
                var("BROADCAST_INTERVAL_HOURS"),
                DEFAULT_BROADCAST_INTERVAL_HOURS,
                MAX_BROADCAST_INTERVAL_HOURS,
            )?,
            channel_name: var("BROADCAST_CHANNEL_NAME")
                .unwrap_or_else(|| DEFAULT_BROADCAST_CHANNEL_NAME.to_string()),
            message: var("BROADCAST_MESSAGE")
                .unwrap_or_else(|| DEFAULT_BROADCAST_MESSAGE.to_string()),
        };

        Ok(Self {
            discord_bot_token,
            auto_role_name: var("AUTO_ROLE_NAME")
                .unwrap_or_else(|| DEFAULT_AUTO_ROLE_NAME.to_string()),
            raid,
            broadcast,
            keep_alive_addr: var("KEEP_ALIVE_ADDR"),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_bot_token", &"<redacted>")
            .field("auto_role_name", &self.auto_role_name)
            .field("raid", &self.raid)
            .field("broadcast", &self.broadcast)
            .field("keep_alive_addr", &self.keep_alive_addr)
            .finish()
    }
}

/// Parses a strictly positive integer, falling back to `default` when unset.
fn parse_positive<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: fmt::Display,
{
    let Some(raw) = value else {
        return Ok(default);
    };

    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: raw.clone(),
        reason,
    };

    let parsed = raw.trim().parse::<T>().map_err(|e| invalid(e.to_string()))?;
    if parsed == T::default() {
        return Err(invalid("must be greater than zero".to_string()));
    }

    Ok(parsed)
}

/// Parses a strictly positive integer no larger than `max`.
fn parse_bounded<T>(name: &str, value: Option<String>, default: T, max: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + PartialOrd + Default + fmt::Display,
    T::Err: fmt::Display,
{
    let raw = value.clone();
    let parsed = parse_positive(name, value, default)?;
    if parsed > max {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw.unwrap_or_default(),
            reason: format!("must be at most {}", max),
        });
    }

    Ok(parsed)
}
