use async_trait::async_trait;
use sqlx::PgPool;

use crate::constants::STATS_ROW_ID;
use crate::error::Result;
use crate::models::NewInteraction;
use crate::store::InteractionStore;

/// PostgreSQL-backed interaction store
///
/// Each operation is a single statement (or statement group) executed on its
/// own pooled connection; no transaction spans more than one operation.
#[derive(Clone)]
pub struct PgInteractionStore {
    pool: PgPool,
}

impl PgInteractionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionStore for PgInteractionStore {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS interactions (
                interaction_id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                username TEXT NOT NULL DEFAULT '',
                language_code TEXT NOT NULL DEFAULT '',
                is_bot BOOLEAN NOT NULL DEFAULT FALSE,
                interaction_type TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bot_stats (
                id INTEGER PRIMARY KEY,
                unique_users_count BIGINT NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Seed the fixed stats row only if absent; never resets the count
        sqlx::query(
            "INSERT INTO bot_stats (id, unique_users_count) VALUES ($1, 0) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(STATS_ROW_ID)
        .execute(&self.pool)
        .await?;

        tracing::info!("Database schema initialized");
        Ok(())
    }

    async fn record(&self, event: &NewInteraction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO interactions
                (user_id, first_name, last_name, username, language_code, is_bot, interaction_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(event.user_id)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.username)
        .bind(&event.language_code)
        .bind(event.is_bot)
        .bind(&event.interaction_type)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            "Recorded '{}' interaction from user {}",
            event.interaction_type,
            event.user_id
        );
        Ok(())
    }

    async fn read_unique_count(&self) -> Result<i64> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT unique_users_count FROM bot_stats WHERE id = $1")
                .bind(STATS_ROW_ID)
                .fetch_optional(&self.pool)
                .await?;

        Ok(count.unwrap_or(0))
    }

    async fn increment_unique_count(&self) -> Result<()> {
        // Single UPDATE is atomic at the storage-engine level, so concurrent
        // increments do not lose updates
        sqlx::query(
            "UPDATE bot_stats SET unique_users_count = unique_users_count + 1 WHERE id = $1",
        )
        .bind(STATS_ROW_ID)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
