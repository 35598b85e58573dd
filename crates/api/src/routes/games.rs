//! Route definitions for the game catalog.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Catalog routes, mounted at the root.
///
/// ```text
/// POST   /add-games        -> add_game (multipart, body limited to max_upload_bytes)
/// GET    /get-games        -> list_games
/// POST   /search-games     -> search_games
/// GET    /game?name=TITLE  -> game_detail (HTML)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/add-games",
            post(games::add_game).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/get-games", get(games::list_games))
        .route("/search-games", post(games::search_games))
        .route("/game", get(games::game_detail))
}
