//! Error types for the bot.
//!
//! `AppError` is the top-level error type. Gateway calls, command handlers and
//! startup routines all return it, so a failure can either be propagated with
//! `?` (commands, startup) or captured into a report and logged (lockdown,
//! broadcast).

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the bot refuses to connect without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected behavior & possible bugs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error from the broadcast scheduler.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, raised by the keep-alive listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A guild, channel, role or user could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// Invalid input supplied by the invoking user.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
