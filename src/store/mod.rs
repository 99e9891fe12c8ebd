pub mod postgres;

pub use postgres::PgInteractionStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::NewInteraction;

/// Data-access contract for interaction events and the start counter
///
/// Operations return explicit `Result`s; callers decide whether a failure is
/// logged-and-ignored (the command handlers do this) or escalated. Nothing in
/// here retries or suppresses errors on its own.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Ensure the tables and the fixed stats row exist.
    ///
    /// Idempotent; safe to call on every startup. Calling it twice leaves
    /// exactly one stats row and does not reset its count.
    async fn initialize(&self) -> Result<()>;

    /// Insert one interaction row.
    async fn record(&self, event: &NewInteraction) -> Result<()>;

    /// Read the start counter. A missing stats row reads as 0.
    async fn read_unique_count(&self) -> Result<i64>;

    /// Atomically increment the start counter by one.
    async fn increment_unique_count(&self) -> Result<()>;
}
