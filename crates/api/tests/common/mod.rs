#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use planner_api::config::ServerConfig;
use planner_api::router::build_app_router;
use planner_api::state::AppState;
use planner_catalog::{ArtworkCatalog, CatalogConfig};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// CORS mirrors any origin (the dev default) and catalog lookups are off.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        catalog: CatalogConfig {
            enabled: false,
            ..CatalogConfig::default()
        },
    }
}

/// Build the full application router with catalog lookups disabled.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_with_config(pool, test_config())
}

/// Build the application with catalog lookups enabled against `base_url`.
pub fn build_test_app_with_catalog(pool: SqlitePool, base_url: String) -> Router {
    let mut config = test_config();
    config.catalog = CatalogConfig {
        base_url,
        timeout: Duration::from_millis(500),
        ..CatalogConfig::default()
    };
    build_app_with_config(pool, config)
}

/// Build the application from an explicit config, through the same
/// [`build_app_router`] the binary uses.
pub fn build_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    let catalog = ArtworkCatalog::new(&config.catalog).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

/// POST a body verbatim with the given content type.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn patch(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
