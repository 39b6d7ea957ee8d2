mod bot;
mod config;
mod error;
mod keep_alive;
mod model;
mod scheduler;
mod service;
mod util;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    if let Some(addr) = config.keep_alive_addr.clone() {
        tokio::spawn(async move {
            if let Err(e) = keep_alive::serve(&addr).await {
                tracing::error!("Keep-alive endpoint error: {}", e);
            }
        });
    }

    let client = bot::start::init_bot(&config).await?;
    bot::start::start_bot(client).await
}
