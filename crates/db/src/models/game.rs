//! Game catalog models and DTOs.

use gamevault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// An image embedded in a game record.
///
/// `data` is the base64 encoding of the uploaded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameImage {
    pub data: String,
    pub content_type: String,
}

/// A game record as returned to clients.
///
/// `image` is omitted from the JSON entirely when the record has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<GameImage>,
    pub download_link: String,
    pub created_at: Timestamp,
}

/// A row from the `games` table.
///
/// The schema guarantees the two image columns are either both set or both
/// NULL.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image_data: Option<String>,
    pub image_content_type: Option<String>,
    pub download_link: String,
    pub created_at: Timestamp,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        let image = match (row.image_data, row.image_content_type) {
            (Some(data), Some(content_type)) => Some(GameImage { data, content_type }),
            _ => None,
        };
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            image,
            download_link: row.download_link,
            created_at: row.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new game record. `id` and `created_at` are assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGame {
    pub title: String,
    pub content: String,
    pub download_link: String,
    pub image: Option<GameImage>,
}
