//! Handlers for the `/projects` resource.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planner_catalog::{ArtworkCatalog, ArtworkCheck};
use planner_core::error::CoreError;
use planner_core::place::has_external_ref;
use planner_core::project::{validate_project_name, visited_places_conflict};
use planner_core::types::DbId;
use planner_db::models::place::CreatePlace;
use planner_db::models::project::{CreateProject, ProjectWithPlaces};
use planner_db::repositories::{DeleteOutcome, PlaceRepo, ProjectRepo};

use crate::error::{AppError, AppJson, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /projects/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithPlaces>>> {
    let projects = ProjectRepo::list_with_places(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /projects/
///
/// Places with an empty `external_id` are dropped. The rest are checked
/// against the artwork catalog one by one before anything is written, within
/// the budget from [`ServerConfig::catalog_budget`]; the outcome of each check
/// is logged only. The project row is committed first, then all places in one
/// transaction.
///
/// [`ServerConfig::catalog_budget`]: crate::config::ServerConfig::catalog_budget
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectWithPlaces>)> {
    validate_project_name(&input.name)?;
    input.places.retain(|p| has_external_ref(&p.external_id));

    confirm_places(&state.catalog, &input.places, state.config.catalog_budget()).await;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    if !input.places.is_empty() {
        PlaceRepo::create_many(&state.pool, project.id, &input.places).await?;
    }

    let created = ProjectRepo::find_with_places(&state.pool, project.id)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Project {} missing after creation", project.id))
        })?;

    tracing::info!(
        project_id = created.project.id,
        places = created.places.len(),
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /projects/{id}
///
/// Rejected while any of the project's places is visited.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    match ProjectRepo::delete_unvisited(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(project_id = id, "Project deleted");
            Ok(Json(StatusResponse::ok()))
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })),
        DeleteOutcome::HasVisitedPlaces => Err(AppError::Core(visited_places_conflict())),
    }
}

/// Check each place against the catalog. Outcomes are logged and dropped;
/// nothing here can fail project creation.
///
/// Lookups still pending when `budget` runs out are abandoned so the writes
/// always happen before the request timeout.
async fn confirm_places(catalog: &ArtworkCatalog, places: &[CreatePlace], budget: Duration) {
    if !catalog.is_enabled() || places.is_empty() {
        return;
    }

    let mut checked = 0usize;
    let lookups = async {
        for place in places {
            let external_id = place.external_id.as_str();
            match catalog.check(external_id).await {
                ArtworkCheck::Confirmed { title } => {
                    tracing::info!(external_id, title = ?title, "Artwork confirmed in catalog");
                }
                ArtworkCheck::NotFound => {
                    tracing::warn!(external_id, "Artwork not found in catalog, creating place anyway");
                }
                ArtworkCheck::Unreachable { reason } => {
                    tracing::warn!(external_id, %reason, "Catalog unavailable, skipping validation");
                }
            }
            checked += 1;
        }
    };

    let finished = tokio::time::timeout(budget, lookups).await.is_ok();
    if !finished {
        tracing::warn!(
            checked,
            skipped = places.len() - checked,
            budget_ms = budget.as_millis() as u64,
            "Catalog validation budget spent, skipping remaining lookups"
        );
    }
}
