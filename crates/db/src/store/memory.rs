use async_trait::async_trait;
use gamevault_core::search::title_contains;
use gamevault_core::types::DbId;
use tokio::sync::RwLock;

use super::GameStore;
use crate::models::game::{CreateGame, Game};

/// Process-local [`GameStore`] kept in insertion order.
///
/// Ids start at 1 and are never reused. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    games: Vec<Game>,
}

impl MemoryGameStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.games.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.games.is_empty()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, dto: CreateGame) -> Result<Game, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let game = Game {
            id: inner.last_id,
            title: dto.title,
            content: dto.content,
            image: dto.image,
            download_link: dto.download_link,
            created_at: chrono::Utc::now(),
        };
        inner.games.push(game.clone());
        Ok(game)
    }

    async fn list_all(&self) -> Result<Vec<Game>, sqlx::Error> {
        Ok(self.inner.read().await.games.clone())
    }

    async fn search_by_title_substring(&self, keyword: &str) -> Result<Vec<Game>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .games
            .iter()
            .filter(|g| title_contains(&g.title, keyword))
            .cloned()
            .collect())
    }

    async fn find_by_exact_title(&self, title: &str) -> Result<Option<Game>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner.games.iter().find(|g| g.title == title).cloned())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
