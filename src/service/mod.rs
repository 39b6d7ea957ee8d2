//! Service layer.
//!
//! - `discord` - Gateway seam between the services and the Discord API
//! - `raid` - Join tracking, raid detection and lockdown

pub mod discord;
pub mod raid;
