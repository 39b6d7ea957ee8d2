//! Discord bot integration.
//!
//! This module wires the bot to Discord: the Serenity event handler reacting
//! to gateway events (`handler`), the poise slash-command surface (`command`)
//! and the client construction (`start`).
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and role state for the cache
//! - `GUILD_MEMBERS` - Member join events driving auto-role and raid detection (privileged intent)
//! - `GUILD_MESSAGES` - Message access for `/clear`
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
