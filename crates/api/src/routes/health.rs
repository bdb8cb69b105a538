//! `GET /health`: whether the planner can serve its routes.
//!
//! The store is the only hard dependency. The artwork catalog is advisory,
//! so only its setting is reported; no lookup is made.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store answers, `unavailable` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// `up` or `down`.
    pub store: &'static str,
    /// `enabled` or `disabled`; lookups are never required to succeed.
    pub catalog_validation: &'static str,
}

/// Answers 503 while the store is unreachable.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let store_up = match planner_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store unreachable during health check");
            false
        }
    };

    let (status_code, status, store) = if store_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable", "down")
    };
    let catalog_validation = if state.catalog.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
        catalog_validation,
    };
    (status_code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
