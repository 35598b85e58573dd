//! Static pages served from the public directory.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Landing page, served at `/`.
pub const INDEX_PAGE: &str = "index.html";
/// Add-game form, served at `/g`.
pub const ADD_GAME_PAGE: &str = "addGames.html";

/// ```text
/// GET /      -> <public_dir>/index.html
/// GET /g     -> <public_dir>/addGames.html
/// GET /*     -> any other file under <public_dir>, else 404
/// ```
pub fn router(public_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(public_dir.join(INDEX_PAGE)))
        .route_service("/g", ServeFile::new(public_dir.join(ADD_GAME_PAGE)))
        .fallback_service(ServeDir::new(public_dir))
}
