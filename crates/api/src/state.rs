use std::sync::Arc;

use gamevault_db::store::GameStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog store (PostgreSQL or in-memory).
    pub store: Arc<dyn GameStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
