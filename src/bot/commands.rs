//! The two command handlers
//!
//! Both are single-shot and stateless: at most one store read/write followed
//! by one reply send. Store failures are logged and never prevent the reply,
//! so the user always receives an answer attempt even during a database
//! outage.

use crate::constants::{INTERACTION_START, OPEN_APP_BUTTON_LABEL};
use crate::error::Result;
use crate::models::NewInteraction;
use crate::telegram::types::{InlineKeyboardMarkup, Message};
use crate::AppState;

/// Handle /start: record the interaction, bump the counter, greet with the
/// web-app button
///
/// The counter increments on every invocation, not just the first one per
/// user, preserving the behavior of the deployed bot.
pub async fn start(state: &AppState, message: &Message) -> Result<()> {
    let Some(user) = message.from.as_ref() else {
        tracing::warn!(
            "Ignoring /start without a sender in chat {}",
            message.chat.id
        );
        return Ok(());
    };

    tracing::info!("User {} ({}) started the bot", user.id, user.first_name);

    let event = NewInteraction::from_user(user, INTERACTION_START);
    if let Err(e) = state.store.record(&event).await {
        tracing::error!("Failed to record interaction for user {}: {}", user.id, e);
    }

    if let Err(e) = state.store.increment_unique_count().await {
        tracing::error!("Failed to increment the user counter: {}", e);
    }

    let greeting = format!(
        "Hi, {}! 👋\n\nThanks for starting this bot. To access the app, tap the button below.",
        user.first_name
    );
    let keyboard =
        InlineKeyboardMarkup::web_app_button(OPEN_APP_BUTTON_LABEL, &state.config.web_app_url);

    state
        .bot
        .send_message(message.chat.id, &greeting, Some(keyboard))
        .await
}

/// Handle /stats: reply with the current counter value
///
/// A failed read is logged and reported as 0 rather than surfaced to the
/// user.
pub async fn stats(state: &AppState, message: &Message) -> Result<()> {
    let unique_users = match state.store.read_unique_count().await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to read the user counter: {}", e);
            0
        }
    };

    let text = format!(
        "There are currently {} unique users who have interacted with the bot.",
        unique_users
    );

    state.bot.send_message(message.chat.id, &text, None).await
}
