use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TelegramApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
