use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use test_utils::serenity::create_test_member;

use crate::bot::handler::member::handle_guild_member_addition;
use crate::model::{
    channel::TextChannel,
    raid::{AlertOutcome, RaidPolicy},
};
use crate::service::{discord::mock::MockGateway, raid::JoinTracker};

mod member;

fn t(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::seconds(seconds)
}
