//! HTTP client for artwork lookups.
//!
//! Wraps `GET {base_url}/{external_id}` using [`reqwest`] and folds every
//! failure mode into an [`ArtworkCheck`].

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::CatalogConfig;

/// Outcome of a single catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkCheck {
    /// The catalog answered 200 for this id.
    Confirmed {
        /// Artwork title, when the response body carried one.
        title: Option<String>,
    },
    /// The catalog answered 404 for this id.
    NotFound,
    /// Transport error, timeout, or any status other than 200/404.
    Unreachable { reason: String },
}

/// Errors from the catalog HTTP layer.
///
/// Only [`ArtworkCatalog::new`] returns these directly; lookups convert
/// them into [`ArtworkCheck::Unreachable`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The configured base URL cannot have path segments appended.
    #[error("Invalid catalog base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a status other than 200 or 404.
    #[error("Catalog returned HTTP {0}")]
    Status(u16),
}

/// Subset of the catalog's `{"data": {...}}` artwork envelope.
#[derive(Debug, Deserialize)]
struct ArtworkEnvelope {
    data: ArtworkData,
}

#[derive(Debug, Deserialize)]
struct ArtworkData {
    title: Option<String>,
}

/// HTTP client for the artwork catalog.
#[derive(Debug)]
pub struct ArtworkCatalog {
    client: reqwest::Client,
    base_url: Url,
    enabled: bool,
}

impl ArtworkCatalog {
    /// Build a client from configuration.
    ///
    /// The timeout, user agent and certificate policy are fixed on the
    /// underlying [`reqwest::Client`] so every lookup shares them.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| CatalogError::InvalidBaseUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            base_url,
            enabled: config.enabled,
        })
    }

    /// Whether lookups should be made at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// URL for one artwork. The id is percent-encoded as a single path
    /// segment, so `/` or `?` in an id cannot escape the artworks path.
    pub fn artwork_url(&self, external_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(external_id);
        }
        url
    }

    /// Look up an artwork. Never fails; see [`ArtworkCheck`].
    pub async fn check(&self, external_id: &str) -> ArtworkCheck {
        match self.lookup(external_id).await {
            Ok(check) => check,
            Err(e) => ArtworkCheck::Unreachable {
                reason: e.to_string(),
            },
        }
    }

    async fn lookup(&self, external_id: &str) -> Result<ArtworkCheck, CatalogError> {
        let response = self
            .client
            .get(self.artwork_url(external_id))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                // The title is informational; an unexpected body still confirms.
                let title = response
                    .json::<ArtworkEnvelope>()
                    .await
                    .ok()
                    .and_then(|envelope| envelope.data.title);
                Ok(ArtworkCheck::Confirmed { title })
            }
            StatusCode::NOT_FOUND => Ok(ArtworkCheck::NotFound),
            status => Err(CatalogError::Status(status.as_u16())),
        }
    }
}
