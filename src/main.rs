use std::sync::Arc;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homework_bot::config::Config;
use homework_bot::practicum::PracticumHttpClient;
use homework_bot::services::StatusPoller;
use homework_bot::telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "homework_bot=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new_from_env().inspect_err(|e| error!("{}", e))?;

    let practicum = Arc::new(PracticumHttpClient::new(&config)?);
    let messenger = Arc::new(TelegramMessenger::new(&config)?);

    StatusPoller::new(practicum, messenger, config.retry_period)
        .start()
        .await;

    Ok(())
}
