use std::path::PathBuf;
use std::str::FromStr;

use gamevault_core::search::EmptyKeywordPolicy;

/// Which [`GameStore`](gamevault_db::store::GameStore) implementation backs
/// the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at `DATABASE_URL`.
    Postgres,
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "unknown store backend '{other}' (expected 'postgres' or 'memory')"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted `/add-games` request body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Directory holding the static pages (default: `public`).
    pub public_dir: PathBuf,
    /// What an empty search keyword returns (default: `all`).
    pub search_empty_keyword: EmptyKeywordPolicy,
    /// Store implementation (default: `postgres`).
    pub store_backend: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3001`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:3001`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`               |
    /// | `PUBLIC_DIR`           | `public`                 |
    /// | `SEARCH_EMPTY_KEYWORD` | `all`                    |
    /// | `GAME_STORE`           | `postgres`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "10485760".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let public_dir = PathBuf::from(
            std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into()),
        );

        let search_empty_keyword: EmptyKeywordPolicy = std::env::var("SEARCH_EMPTY_KEYWORD")
            .unwrap_or_else(|_| "all".into())
            .parse()
            .unwrap_or_else(|e| panic!("SEARCH_EMPTY_KEYWORD: {e}"));

        let store_backend: StoreBackend = std::env::var("GAME_STORE")
            .unwrap_or_else(|_| "postgres".into())
            .parse()
            .unwrap_or_else(|e| panic!("GAME_STORE: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            public_dir,
            search_empty_keyword,
            store_backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_backend_accepts_known_names() {
        assert_eq!("postgres".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert_eq!("PostgreSQL".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
    }

    #[test]
    fn store_backend_rejects_unknown_names() {
        assert!("mongodb".parse::<StoreBackend>().is_err());
    }
}
