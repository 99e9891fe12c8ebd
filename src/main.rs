use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use miniapp_gateway_bot::db::create_pool;
use miniapp_gateway_bot::store::{InteractionStore, PgInteractionStore};
use miniapp_gateway_bot::telegram::TelegramClient;
use miniapp_gateway_bot::{router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "miniapp_gateway_bot=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mini-App Gateway Bot...");

    // Load configuration; missing required values abort startup
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("Server: {}", config.server_address());

    // Create database connection pool
    let pool = create_pool(&config.database_url)?;

    // Ensure the schema and the stats row exist. Startup proceeds even if
    // this fails; store calls will then keep failing and be logged per call.
    let store = Arc::new(PgInteractionStore::new(pool));
    if let Err(e) = store.initialize().await {
        tracing::error!("Database initialization failed: {}", e);
    }

    let bot = Arc::new(TelegramClient::new(config.bot_token.clone()));

    // Create app state and router
    let state = AppState::new(store, bot, config.clone());
    let app = router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
