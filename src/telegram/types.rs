//! Minimal Telegram Bot API wire types
//!
//! Only the fields this bot reads are modeled; everything else in the update
//! payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// An inbound update delivered to the webhook
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// A chat message contained in an update
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<TelegramUser>,
    pub chat: Chat,
    pub text: Option<String>,
}

/// The chat a message belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// The Telegram account that sent a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

/// Inline keyboard attached to an outbound message
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// A keyboard with a single button that opens the given web app
    pub fn web_app_button(label: &str, url: &str) -> Self {
        Self {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: label.to_string(),
                web_app: Some(WebAppInfo {
                    url: url.to_string(),
                }),
            }]],
        }
    }
}

/// One inline keyboard button
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
}

/// Deep-link target for a web-app button
#[derive(Debug, Clone, Serialize)]
pub struct WebAppInfo {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_deserializes_from_bot_api_payload() {
        let payload = serde_json::json!({
            "update_id": 10001,
            "message": {
                "message_id": 1365,
                "from": {
                    "id": 42,
                    "is_bot": false,
                    "first_name": "Ada",
                    "username": "ada",
                    "language_code": "en"
                },
                "chat": { "id": 42, "type": "private" },
                "date": 1441645532,
                "text": "/start"
            }
        });

        let update: Update = serde_json::from_value(payload).unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("/start"));
        assert_eq!(message.from.unwrap().first_name, "Ada");
    }

    #[test]
    fn test_update_without_message_deserializes() {
        let payload = serde_json::json!({ "update_id": 10002 });
        let update: Update = serde_json::from_value(payload).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn test_web_app_keyboard_serializes_without_null_fields() {
        let markup = InlineKeyboardMarkup::web_app_button("Open", "https://app.example.com");
        let json = serde_json::to_value(&markup).unwrap();

        assert_eq!(json["inline_keyboard"][0][0]["text"], "Open");
        assert_eq!(
            json["inline_keyboard"][0][0]["web_app"]["url"],
            "https://app.example.com"
        );
    }
}
