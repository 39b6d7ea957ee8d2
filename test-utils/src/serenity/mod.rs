//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Channel, Member, User) for testing purposes. The factories
//! deserialize JSON shaped like Discord API payloads, so the resulting values
//! are exactly what Serenity would hand to an event handler.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_member, TEXT_CHANNEL};
//!
//! #[tokio::test]
//! async fn locks_channels() {
//!     let general = create_test_channel(10, 1, "general", TEXT_CHANNEL, 0);
//!     let raider = create_test_member(1, 42, "raider");
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod role;
pub mod user;

pub use channel::{create_test_channel, ANNOUNCEMENT_CHANNEL, TEXT_CHANNEL, VOICE_CHANNEL};
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
