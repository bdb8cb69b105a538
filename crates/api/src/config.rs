use std::time::Duration;

use planner_catalog::CatalogConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://travel.db`).
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` mirrors any requesting origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`). Catalog lookups
    /// during project creation get half of it.
    pub request_timeout_secs: u64,
    /// External artwork catalog settings.
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `HOST`                 | `0.0.0.0`            |
    /// | `PORT`                 | `8000`               |
    /// | `DATABASE_URL`         | `sqlite://travel.db` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                  |
    /// | `CORS_ORIGINS`         | `*`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                 |
    ///
    /// Catalog settings are read by [`CatalogConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://travel.db".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            catalog: CatalogConfig::from_env(),
        }
    }

    /// Total time project creation may spend on catalog lookups: half the
    /// request timeout, leaving the other half for the database writes.
    pub fn catalog_budget(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs) / 2
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
