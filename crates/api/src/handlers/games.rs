//! Handlers for the game catalog.
//!
//! Each handler is a single store call: create, list, search, or exact-title
//! lookup for the detail page.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Query, State};
use axum::response::Html;
use axum::Json;
use gamevault_core::error::CoreError;
use gamevault_core::search::{resolve_keyword, TitleQuery};
use gamevault_db::models::game::Game;
use serde::Deserialize;

use crate::error::AppResult;
use crate::render::game_detail_page;
use crate::state::AppState;
use crate::upload::GameUpload;

/// Request body for `POST /search-games`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: Option<String>,
}

/// Query parameters for `GET /game`.
#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub name: Option<String>,
}

/// POST /add-games
///
/// Multipart form with `title`, `content`, `downloadLink` and an optional
/// `image` file. Returns the stored record.
pub async fn add_game(State(state): State<AppState>, multipart: Multipart) -> AppResult<Json<Game>> {
    let dto = GameUpload::from_multipart(multipart)
        .await?
        .into_create_game()?;

    let game = state.store.create(dto).await?;

    tracing::info!(
        game_id = game.id,
        title = %game.title,
        has_image = game.image.is_some(),
        "Game created",
    );

    Ok(Json(game))
}

/// GET /get-games
pub async fn list_games(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = state.store.list_all().await?;

    tracing::debug!(result_count = games.len(), "Listed games");

    Ok(Json(games))
}

/// POST /search-games
///
/// JSON body `{"keyword": "..."}`. An absent keyword is treated as empty and
/// handled per the configured empty keyword policy.
pub async fn search_games(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Game>>> {
    let Json(input) = payload.map_err(|e| CoreError::Validation(e.body_text()))?;

    let query = resolve_keyword(input.keyword.as_deref(), state.config.search_empty_keyword);
    let games = match &query {
        TitleQuery::All => state.store.list_all().await?,
        TitleQuery::Nothing => Vec::new(),
        TitleQuery::Substring(keyword) => state.store.search_by_title_substring(keyword).await?,
    };

    tracing::debug!(?query, result_count = games.len(), "Searched games");

    Ok(Json(games))
}

/// GET /game?name=TITLE
///
/// Renders the detail page for the first game whose title matches exactly.
pub async fn game_detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> AppResult<Html<String>> {
    let name = params.name.ok_or_else(|| {
        CoreError::Validation("Missing required query parameter: name".to_string())
    })?;

    let found = state.store.find_by_exact_title(&name).await?;
    let game = found.ok_or(CoreError::NotFound {
        entity: "Game",
        key: name,
    })?;

    Ok(Html(game_detail_page(&game)))
}
