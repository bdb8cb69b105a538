//! Place entity model and DTOs.

use planner_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A place row from the `places` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub external_id: String,
    pub notes: Option<String>,
    pub is_visited: bool,
    pub project_id: DbId,
}

/// DTO for a place supplied inline with a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub external_id: String,
    /// Defaults to the placeholder note when the field is omitted.
    #[serde(default = "planner_core::place::default_notes")]
    pub notes: Option<String>,
}
