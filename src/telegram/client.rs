use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::telegram::types::InlineKeyboardMarkup;

/// Outbound Telegram Bot API surface used by the command handlers
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Send a text message to a chat, optionally with an inline keyboard.
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()>;

    /// Register `url` as this bot's webhook target.
    async fn set_webhook(&self, url: &str) -> Result<()>;
}

/// Bot API method response envelope
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// reqwest-backed Bot API client
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.token, method)
    }

    /// POST a method call and unwrap the Bot API response envelope
    async fn call(&self, method: &str, body: serde_json::Value) -> Result<()> {
        let response = self
            .http
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await?;

        let api_response: ApiResponse = response.json().await?;
        if !api_response.ok {
            return Err(AppError::Telegram(
                api_response
                    .description
                    .unwrap_or_else(|| format!("{} returned ok=false", method)),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl BotApi for TelegramClient {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(markup) = reply_markup {
            body["reply_markup"] = serde_json::to_value(markup)
                .map_err(|e| AppError::Telegram(format!("invalid reply markup: {e}")))?;
        }

        self.call("sendMessage", body).await
    }

    async fn set_webhook(&self, url: &str) -> Result<()> {
        self.call("setWebhook", json!({ "url": url })).await
    }
}
