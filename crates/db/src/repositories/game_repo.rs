//! Repository for the `games` table.

use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, GameRow};

/// Column list for `games` queries.
const COLUMNS: &str = "\
    id, title, content, image_data, image_content_type, \
    download_link, created_at";

/// Provides data access for game records.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the stored row with its assigned `id`
    /// and `created_at`.
    pub async fn create(pool: &PgPool, dto: &CreateGame) -> Result<Game, sqlx::Error> {
        let (image_data, image_content_type) = match &dto.image {
            Some(image) => (Some(image.data.as_str()), Some(image.content_type.as_str())),
            None => (None, None),
        };
        let query = format!(
            "INSERT INTO games \
                 (title, content, image_data, image_content_type, download_link) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(image_data)
            .bind(image_content_type)
            .bind(&dto.download_link)
            .fetch_one(pool)
            .await
            .map(Game::from)
    }

    /// List every game.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id ASC");
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Search games by title (case-insensitive substring).
    ///
    /// The keyword is matched literally; LIKE wildcards in it are escaped.
    pub async fn search_by_title(pool: &PgPool, keyword: &str) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM games \
             WHERE title ILIKE '%' || $1 || '%' ESCAPE '\\' \
             ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(escape_like_literal(keyword))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Find the earliest game whose title equals `title` exactly.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM games WHERE title = $1 ORDER BY id ASC LIMIT 1"
        );
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Game::from))
    }
}

fn escape_like_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            other => out.push(other),
        }
    }
    out
}
