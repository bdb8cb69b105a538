//! Repository for the `projects` table.

use std::collections::HashMap;

use planner_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::place::Place;
use crate::models::project::{CreateProject, Project, ProjectWithPlaces};
use crate::repositories::place_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, start_date, is_completed";

/// Result of [`ProjectRepo::delete_unvisited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The project and all of its places are gone.
    Deleted,
    /// No project with that id exists (or another request removed it first).
    NotFound,
    /// At least one place is visited; nothing was removed.
    HasVisitedPlaces,
}

/// Provides create, eager-loading reads and guarded delete for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project row, returning it.
    ///
    /// Only the project columns are written; `input.places` is left to
    /// [`PlaceRepo::create_many`](crate::repositories::PlaceRepo::create_many)
    /// once the project id exists.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, start_date)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.start_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID together with its places.
    pub async fn find_with_places(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ProjectWithPlaces>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(project) = project else {
            return Ok(None);
        };

        let places_query = format!(
            "SELECT {} FROM places WHERE project_id = ? ORDER BY id",
            place_repo::COLUMNS
        );
        let places = sqlx::query_as::<_, Place>(&places_query)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(ProjectWithPlaces { project, places }))
    }

    /// List every project in creation order with its places loaded.
    ///
    /// Issues exactly two queries inside one read transaction, regardless of
    /// how many projects exist.
    pub async fn list_with_places(pool: &SqlitePool) -> Result<Vec<ProjectWithPlaces>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        let projects = sqlx::query_as::<_, Project>(&query)
            .fetch_all(&mut *tx)
            .await?;

        let places_query = format!(
            "SELECT {} FROM places ORDER BY project_id, id",
            place_repo::COLUMNS
        );
        let places = sqlx::query_as::<_, Place>(&places_query)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(attach_places(projects, places))
    }

    /// Delete a project and its places, provided none of them is visited.
    ///
    /// The visited check runs inside the delete statement, so a place marked
    /// visited after any earlier read still blocks the delete. When nothing
    /// was removed, the same transaction tells a missing project apart from a
    /// guarded one.
    pub async fn delete_unvisited(pool: &SqlitePool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM projects
             WHERE id = ?1
               AND NOT EXISTS (
                   SELECT 1 FROM places WHERE project_id = ?1 AND is_visited = TRUE
               )",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
            return Ok(if remaining == 0 {
                DeleteOutcome::NotFound
            } else {
                DeleteOutcome::HasVisitedPlaces
            });
        }

        // Covered by ON DELETE CASCADE when foreign keys are on; explicit so
        // connections opened without the pragma leave no orphans either.
        let places = sqlx::query("DELETE FROM places WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            project_id = id,
            orphaned_places = places.rows_affected(),
            "Project and its places deleted"
        );
        Ok(DeleteOutcome::Deleted)
    }
}

/// Group place rows under their owning projects, preserving project order
/// and the order of places within each project.
fn attach_places(projects: Vec<Project>, places: Vec<Place>) -> Vec<ProjectWithPlaces> {
    let mut by_project: HashMap<DbId, Vec<Place>> = HashMap::new();
    for place in places {
        by_project.entry(place.project_id).or_default().push(place);
    }

    projects
        .into_iter()
        .map(|project| {
            let places = by_project.remove(&project.id).unwrap_or_default();
            ProjectWithPlaces { project, places }
        })
        .collect()
}
