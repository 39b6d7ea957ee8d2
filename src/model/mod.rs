//! Domain models shared by the raid, broadcast and command layers.
//!
//! - `raid` - Raid detection policy and lockdown outcome
//! - `broadcast` - Periodic broadcast policy and outcome
//! - `channel` - Guild text channel summary used by the gateway

pub mod broadcast;
pub mod channel;
pub mod raid;
