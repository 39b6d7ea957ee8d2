//! Raidguard Test Utils
//!
//! Shared testing utilities for the raidguard bot. The crate provides
//! factories that build Serenity model objects (guilds, channels, roles,
//! members, users) from JSON fixtures, so event handlers and command helpers
//! can be exercised without a Discord connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_user};
//!
//! #[tokio::test]
//! async fn handles_join() {
//!     let member = create_test_member(1, 42, "newcomer");
//!     let moderator = create_test_user(7, "moderator");
//!     // Drive the handler under test...
//! }
//! ```

pub mod serenity;
