use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::telegram::types::TelegramUser;

/// A persisted interaction row
///
/// Append-only: rows are never updated or deleted once written.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Interaction {
    pub interaction_id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub language_code: String,
    pub is_bot: bool,
    pub interaction_type: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting one interaction row
///
/// Text fields accept the empty string as "unknown"; only the user id and
/// the interaction kind are required to carry meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInteraction {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub language_code: String,
    pub is_bot: bool,
    pub interaction_type: String,
}

impl NewInteraction {
    /// Build an insert payload from the Telegram user attached to a message
    pub fn from_user(user: &TelegramUser, interaction_type: &str) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone().unwrap_or_default(),
            username: user.username.clone().unwrap_or_default(),
            language_code: user.language_code.clone().unwrap_or_default(),
            is_bot: user.is_bot,
            interaction_type: interaction_type.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INTERACTION_START;

    #[test]
    fn test_from_user_defaults_missing_fields_to_empty() {
        let user = TelegramUser {
            id: 42,
            is_bot: false,
            first_name: "Ada".to_string(),
            last_name: None,
            username: None,
            language_code: None,
        };

        let event = NewInteraction::from_user(&user, INTERACTION_START);

        assert_eq!(event.user_id, 42);
        assert_eq!(event.first_name, "Ada");
        assert_eq!(event.last_name, "");
        assert_eq!(event.username, "");
        assert_eq!(event.language_code, "");
        assert!(!event.is_bot);
        assert_eq!(event.interaction_type, "start");
    }
}
