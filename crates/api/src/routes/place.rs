//! Route definitions for the `/places` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::place;
use crate::state::AppState;

/// ```text
/// PATCH  /places/{id}/visit -> mark_visited
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/places/{id}/visit", patch(place::mark_visited))
}
