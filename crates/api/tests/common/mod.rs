#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gamevault_api::config::{ServerConfig, StoreBackend};
use gamevault_api::router::build_app_router;
use gamevault_api::state::AppState;
use gamevault_core::search::EmptyKeywordPolicy;
use gamevault_db::models::game::{CreateGame, Game};
use gamevault_db::store::{GameStore, MemoryGameStore};

pub const BOUNDARY: &str = "gamevault-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Static pages are served from the workspace `public/` directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public"),
        search_empty_keyword: EmptyKeywordPolicy::All,
        store_backend: StoreBackend::Memory,
    }
}

/// Build the full application router over the given store and config.
pub fn build_app_with(store: Arc<dyn GameStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router over an in-memory store.
///
/// Keep a clone of `store` to build further routers over the same data.
pub fn build_test_app(store: Arc<MemoryGameStore>) -> Router {
    build_app_with(store, test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart body builder
// ---------------------------------------------------------------------------

/// Minimal `multipart/form-data` encoder using [`BOUNDARY`].
#[derive(Default)]
pub struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.buf
    }
}

/// A complete add-game form without an image.
pub fn game_form(title: &str) -> MultipartBody {
    MultipartBody::new()
        .text("title", title)
        .text("content", &format!("About {title}"))
        .text("downloadLink", &format!("https://example.com/{title}"))
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every operation fails as if the database were down.
pub struct UnavailableStore;

#[async_trait]
impl GameStore for UnavailableStore {
    async fn create(&self, _dto: CreateGame) -> Result<Game, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_all(&self) -> Result<Vec<Game>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn search_by_title_substring(&self, _keyword: &str) -> Result<Vec<Game>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_exact_title(&self, _title: &str) -> Result<Option<Game>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
