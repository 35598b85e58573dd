use async_trait::async_trait;

use super::GameStore;
use crate::models::game::{CreateGame, Game};
use crate::repositories::GameRepo;
use crate::DbPool;

/// [`GameStore`] backed by PostgreSQL through [`GameRepo`].
#[derive(Debug, Clone)]
pub struct PgGameStore {
    pool: DbPool,
}

impl PgGameStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn create(&self, dto: CreateGame) -> Result<Game, sqlx::Error> {
        GameRepo::create(&self.pool, &dto).await
    }

    async fn list_all(&self) -> Result<Vec<Game>, sqlx::Error> {
        GameRepo::list_all(&self.pool).await
    }

    async fn search_by_title_substring(&self, keyword: &str) -> Result<Vec<Game>, sqlx::Error> {
        GameRepo::search_by_title(&self.pool, keyword).await
    }

    async fn find_by_exact_title(&self, title: &str) -> Result<Option<Game>, sqlx::Error> {
        GameRepo::find_by_title(&self.pool, title).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
