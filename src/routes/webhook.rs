use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::bot;
use crate::constants::WEBHOOK_ACK_BODY;
use crate::error::{AppError, Result};
use crate::telegram::types::Update;
use crate::AppState;

/// Receive one update from the Telegram webhook
///
/// The path segment doubles as a shared secret: only requests carrying the
/// bot token reach the dispatcher. The endpoint acknowledges with `ok`/200
/// no matter what the dispatcher did with the payload — Telegram retries
/// updates that are not acknowledged, and a malformed or unrecognized
/// payload is not worth redelivering.
pub async fn receive_update(
    State(state): State<AppState>,
    Path(secret): Path<String>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    if secret != state.config.bot_token {
        tracing::warn!("Webhook call with invalid path secret rejected");
        return (StatusCode::NOT_FOUND, "not found");
    }

    match serde_json::from_value::<Update>(payload) {
        Ok(update) => bot::dispatch(&state, update).await,
        Err(e) => tracing::warn!("Discarding unparseable update payload: {}", e),
    }

    (StatusCode::OK, WEBHOOK_ACK_BODY)
}

/// Register this service's webhook URL with the Telegram Bot API
///
/// Returns 200 with a confirmation, or 400 with the error text when
/// registration fails. No retry; the operator hits the endpoint again.
pub async fn register_webhook(State(state): State<AppState>) -> Result<String> {
    let webhook_url = state.config.webhook_url();

    state
        .bot
        .set_webhook(&webhook_url)
        .await
        .map_err(|e| AppError::WebhookRegistration(format!("Failed to set webhook: {e}")))?;

    tracing::info!("Webhook registered at {}", webhook_url);
    Ok(format!("Webhook configured at: {webhook_url}"))
}
