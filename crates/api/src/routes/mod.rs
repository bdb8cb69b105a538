pub mod health;
pub mod place;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /projects/                   list, create
/// /projects/{id}               delete
///
/// /places/{id}/visit           mark visited (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(place::router())
}
