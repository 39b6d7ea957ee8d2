use chrono::Utc;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::bot::command::{self, Data};
use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::scheduler::broadcast::BroadcastScheduler;
use crate::service::raid::JoinTracker;

/// Builds the Discord client without connecting it.
///
/// Creates the shared join tracker and broadcast scheduler, the event handler
/// that owns them and the poise framework carrying the slash commands. The
/// commands are registered globally once the framework's setup runs on the
/// first ready event.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_MESSAGES;

    let started_at = Utc::now();

    let tracker = Arc::new(JoinTracker::new(config.raid.clone()));
    let broadcaster = Arc::new(BroadcastScheduler::new(config.broadcast.clone()));
    let handler = Handler::new(tracker, broadcaster, config.auto_role_name.clone());

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::commands(),
            on_error: |error| Box::pin(command::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    "Registered {} slash command(s)",
                    framework.options().commands.len()
                );
                Ok(Data::new(started_at))
            })
        })
        .build();

    let client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects the bot and runs it until shutdown.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` - The gateway connection closed cleanly
/// - `Err(AppError::DiscordErr)` - Connecting or running the shard failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
