//! Repository for the `places` table.

use planner_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::place::{CreatePlace, Place};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, external_id, notes, is_visited, project_id";

/// Provides bulk insert and visit-marking for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert every place for `project_id` in a single transaction.
    ///
    /// Returns the inserted rows in input order. Nothing is written if any
    /// insert fails.
    pub async fn create_many(
        pool: &SqlitePool,
        project_id: DbId,
        inputs: &[CreatePlace],
    ) -> Result<Vec<Place>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO places (external_id, notes, project_id)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );

        let mut places = Vec::with_capacity(inputs.len());
        for input in inputs {
            let place = sqlx::query_as::<_, Place>(&query)
                .bind(&input.external_id)
                .bind(&input.notes)
                .bind(project_id)
                .fetch_one(&mut *tx)
                .await?;
            places.push(place);
        }

        tx.commit().await?;
        Ok(places)
    }

    /// Mark a place as visited. Returns `true` if the place exists.
    ///
    /// Setting the flag again on a visited place still counts as a match.
    pub async fn mark_visited(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE places SET is_visited = TRUE WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
