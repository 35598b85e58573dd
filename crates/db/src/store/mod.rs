//! The store seam used by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn GameStore>` rather than a pool so the backing
//! store can be swapped (PostgreSQL in production, memory for local runs and
//! tests).

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::models::game::{CreateGame, Game};

pub use memory::MemoryGameStore;
pub use postgres::PgGameStore;

/// Catalog operations on game records.
///
/// Errors are `sqlx::Error` for every implementation; the in-memory store
/// never fails.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a record. The store assigns `id` and `created_at`.
    async fn create(&self, dto: CreateGame) -> Result<Game, sqlx::Error>;

    /// Every record. Order is not part of the contract.
    async fn list_all(&self) -> Result<Vec<Game>, sqlx::Error>;

    /// Case-insensitive substring match on the title. An empty keyword
    /// matches every record.
    async fn search_by_title_substring(&self, keyword: &str) -> Result<Vec<Game>, sqlx::Error>;

    /// First record whose title equals `title` exactly (case-sensitive).
    async fn find_by_exact_title(&self, title: &str) -> Result<Option<Game>, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}
