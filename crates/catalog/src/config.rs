use std::time::Duration;

/// Default catalog endpoint; artworks are addressed as `{base_url}/{id}`.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Browser-like identification; the public API rejects some bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Upper bound for a single catalog lookup.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Artwork catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL the artwork id is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header sent with every lookup.
    pub user_agent: String,
    /// Skip TLS certificate verification. Opt-in only.
    pub accept_invalid_certs: bool,
    /// When `false`, no lookups are made at all.
    pub enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            enabled: true,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                                  |
    /// |--------------------------------|------------------------------------------|
    /// | `CATALOG_BASE_URL`             | `https://api.artic.edu/api/v1/artworks`  |
    /// | `CATALOG_TIMEOUT_SECS`         | `5`                                      |
    /// | `CATALOG_USER_AGENT`           | `Mozilla/5.0 (Windows NT 10.0; Win64; x64)` |
    /// | `CATALOG_ACCEPT_INVALID_CERTS` | `false`                                  |
    /// | `CATALOG_VALIDATION_ENABLED`   | `true`                                   |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("CATALOG_TIMEOUT_SECS must be a valid u64");

        let user_agent =
            std::env::var("CATALOG_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.into());

        let accept_invalid_certs = env_flag("CATALOG_ACCEPT_INVALID_CERTS", false);
        let enabled = env_flag("CATALOG_VALIDATION_ENABLED", true);

        if accept_invalid_certs {
            tracing::warn!("Catalog TLS certificate verification is disabled");
        }

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
            accept_invalid_certs,
            enabled,
        }
    }
}

/// Read a boolean environment variable, falling back to `default` when unset.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| panic!("{name} must be true or false")),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
