//! Discord access for the raid and broadcast services.
//!
//! Services talk to Discord through the [`GuildGateway`] trait instead of
//! holding a Serenity context directly. Every fallible call returns a
//! `Result<_, AppError>`, so a caller can record the failure and carry on with
//! the next channel or guild.

pub mod gateway;
pub mod permission;

#[cfg(test)]
pub mod mock;

pub use gateway::{GuildGateway, SerenityGateway};
