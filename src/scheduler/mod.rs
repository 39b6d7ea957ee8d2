//! Recurring jobs.
//!
//! - `broadcast` - Posts the configured reminder message to every guild on a fixed interval

pub mod broadcast;
