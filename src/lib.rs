//! Mini-App Gateway Bot Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod bot;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod telegram;

pub use config::Config;
pub use error::{AppError, Result};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use store::InteractionStore;
use telegram::BotApi;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InteractionStore>,
    pub bot: Arc<dyn BotApi>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store, Bot API client and
    /// configuration
    pub fn new(store: Arc<dyn InteractionStore>, bot: Arc<dyn BotApi>, config: Config) -> Self {
        Self { store, bot, config }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::liveness))
        .route("/set_webhook", get(routes::register_webhook))
        .route("/webhook/:secret", post(routes::receive_update))
        .with_state(state)
}
