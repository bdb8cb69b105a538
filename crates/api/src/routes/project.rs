//! Route definitions for the `/projects` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
///
/// The collection path keeps its trailing slash, which existing clients
/// call verbatim.
///
/// ```text
/// GET    /projects/         -> list
/// POST   /projects/         -> create
/// DELETE /projects/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/", get(project::list).post(project::create))
        .route("/projects/{id}", delete(project::delete))
}
