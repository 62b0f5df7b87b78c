pub mod dto;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::AppError;

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<(), AppError>;
}

pub struct TelegramMessenger {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramMessenger {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Request(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.telegram_api_url.trim_end_matches('/').to_string(),
            bot_token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.bot_token, method)
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, text: &str) -> Result<(), AppError> {
        let request_body = dto::SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        // reqwest errors carry the URL, which embeds the bot token.
        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("sendMessage failed: {}", e.without_url())))?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| {
            AppError::Delivery(format!("Failed to read sendMessage response: {}", e.without_url()))
        })?;
        if !status.is_success() {
            return Err(AppError::Delivery(format!("Telegram API error {}: {}", status, body_text)));
        }

        let parsed: dto::TelegramApiResponse = serde_json::from_str(&body_text)
            .map_err(|e| AppError::Delivery(format!("Invalid sendMessage response: {}", e)))?;
        if !parsed.ok {
            return Err(AppError::Delivery(format!(
                "Telegram API error: {}",
                parsed.description.unwrap_or_default()
            )));
        }

        Ok(())
    }
}

/// Delivers `text` through `messenger`, logging instead of propagating failures.
/// Returns whether the message went out. Never retries.
pub async fn send_message(messenger: &dyn Messenger, text: &str) -> bool {
    match messenger.send_text(text).await {
        Ok(()) => {
            debug!("Bot sent message: \"{}\"", text);
            true
        }
        Err(e) => {
            error!("Failed to send message \"{}\": {}", text, e);
            false
        }
    }
}

pub struct NoopMessenger;

#[async_trait]
impl Messenger for NoopMessenger {
    async fn send_text(&self, _text: &str) -> Result<(), AppError> {
        Ok(())
    }
}
