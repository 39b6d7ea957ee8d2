use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::all::GuildId;

use crate::model::raid::RaidPolicy;
use crate::service::raid::JoinTracker;


/// Fixed reference instant so window arithmetic is exact.
fn t(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::seconds(seconds)
}

fn tracker() -> JoinTracker {
    JoinTracker::new(RaidPolicy::new(60, 5))
}
