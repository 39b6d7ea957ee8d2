use poise::serenity_prelude::Mentionable;
use rand::{seq::IndexedRandom, Rng};

use crate::bot::command::Context;
use crate::error::AppError;

const DIE_FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

pub const JOKES: [&str; 5] = [
    "Why can't bicycles stand up on their own? They're two-tired! 🚴",
    "What did the zero say to the eight? Nice belt! 👔",
    "Why did the tomato turn red? It saw the salad dressing! 🍅",
    "What's a pirate's favourite letter? Rrrrr! 🏴‍☠️",
    "Why did the spider get a job in IT? It was great at building webs! 🕷️",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Heads => "Heads",
            Self::Tails => "Tails",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Heads => "🪙",
            Self::Tails => "💿",
        }
    }
}

/// Rolls a six-sided die.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=6)
}

/// Unicode face of a die value, `🎲` for anything outside 1-6.
pub fn die_face(value: u8) -> &'static str {
    usize::from(value)
        .checked_sub(1)
        .and_then(|index| DIE_FACES.get(index))
        .copied()
        .unwrap_or("🎲")
}

pub fn flip_coin<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

pub fn pick_joke<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOKES.choose(rng).copied().unwrap_or(JOKES[0])
}

/// Says hi to you!
#[poise::command(slash_command)]
pub async fn hej(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say(format!(
        "👋 Hi {}! Nice to meet you!",
        ctx.author().mention()
    ))
    .await?;
    Ok(())
}

/// Shows the bot's gateway latency
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), AppError> {
    let latency = ctx.ping().await;
    ctx.say(format!("🏓 Pong! Latency: **{}ms**", latency.as_millis()))
        .await?;
    Ok(())
}

/// Rolls a die (1-6)
#[poise::command(slash_command)]
pub async fn dice(ctx: Context<'_>) -> Result<(), AppError> {
    let value = roll_die(&mut rand::rng());
    ctx.say(format!(
        "🎲 {} rolled the die and got: **{}** {}",
        ctx.author().mention(),
        value,
        die_face(value)
    ))
    .await?;
    Ok(())
}

/// Flips a coin
#[poise::command(slash_command)]
pub async fn coinflip(ctx: Context<'_>) -> Result<(), AppError> {
    let side = flip_coin(&mut rand::rng());
    ctx.say(format!(
        "{} {} flipped a coin and got: **{}**!",
        side.emoji(),
        ctx.author().mention(),
        side.label()
    ))
    .await?;
    Ok(())
}

/// Tells a joke
#[poise::command(slash_command)]
pub async fn joke(ctx: Context<'_>) -> Result<(), AppError> {
    let joke = pick_joke(&mut rand::rng());
    ctx.say(format!("😄 Joke:\n{}", joke)).await?;
    Ok(())
}
