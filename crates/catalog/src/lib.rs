//! Client for the external artwork catalog (Art Institute of Chicago API).
//!
//! Places reference catalog entries by `external_id`. Before a project is
//! stored, each reference is checked against the catalog on a best-effort
//! basis: [`ArtworkCatalog::check`] never fails, it reports an
//! [`ArtworkCheck`] outcome that callers log and move past.

pub mod client;
pub mod config;

pub use client::{ArtworkCatalog, ArtworkCheck, CatalogError};
pub use config::CatalogConfig;
