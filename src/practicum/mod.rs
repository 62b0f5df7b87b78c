pub mod dto;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

#[async_trait]
pub trait PracticumClient: Send + Sync {
    /// Fetches homework statuses changed since `from_date` (Unix seconds).
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, AppError>;
}

pub struct PracticumHttpClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumHttpClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Request(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    fn request_url(&self, from_date: i64) -> Result<Url, AppError> {
        Url::parse_with_params(&self.endpoint, &[("from_date", from_date.to_string())])
            .map_err(|e| AppError::Request(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }
}

#[async_trait]
impl PracticumClient for PracticumHttpClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, AppError> {
        let url = self.request_url(from_date)?;
        tracing::debug!("Requesting {} with from_date={}", self.endpoint, from_date);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|e| map_send_error(&self.endpoint, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::Connection(format!("Failed to read body from {}: {}", self.endpoint, e)))?;

        serde_json::from_str::<Value>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse: {} (body: {})", e, body_text);
            AppError::Decode(e.to_string())
        })
    }
}

fn map_send_error(endpoint: &str, e: reqwest::Error) -> AppError {
    if e.is_builder() {
        AppError::Request(format!("Failed to build request to {}: {}", endpoint, e))
    } else {
        AppError::Connection(format!("{}: {}", endpoint, e))
    }
}

/// Always answers with an empty window echoing `from_date` back as `current_date`.
pub struct NoopPracticumClient;

#[async_trait]
impl PracticumClient for NoopPracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, AppError> {
        Ok(serde_json::json!({
            "homeworks": [],
            "current_date": from_date,
        }))
    }
}
