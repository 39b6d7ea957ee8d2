use rand::{rngs::StdRng, SeedableRng};
use test_utils::serenity::{
    create_test_channel, create_test_guild, create_test_member, create_test_role, TEXT_CHANNEL,
    VOICE_CHANNEL,
};

use crate::bot::command::{
    fun::{die_face, flip_coin, pick_joke, roll_die, CoinSide, JOKES},
    info::{build_serverinfo_embed, build_userinfo_embed, ServerSummary},
    moderation::reason_or_default,
};


/// Deterministic RNG so game tests are reproducible.
fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}
