//! Handlers for the `/places` resource.

use axum::extract::{Path, State};
use axum::Json;
use planner_core::error::CoreError;
use planner_core::types::DbId;
use planner_db::repositories::PlaceRepo;

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// PATCH /places/{id}/visit
///
/// Idempotent: marking an already visited place succeeds again.
pub async fn mark_visited(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    if !PlaceRepo::mark_visited(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }));
    }

    tracing::debug!(place_id = id, "Place marked visited");
    Ok(Json(StatusResponse::ok()))
}
