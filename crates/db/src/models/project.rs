//! Project entity model and DTOs.

use planner_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::place::{CreatePlace, Place};

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    /// Never changed by any current operation.
    pub is_completed: bool,
}

/// A project together with its places, in insertion order.
///
/// Serializes flat: the project columns plus a `places` array.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithPlaces {
    #[serde(flatten)]
    pub project: Project,
    pub places: Vec<Place>,
}

/// DTO for creating a new project with its places.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    /// Free-form text, not parsed as a date.
    pub start_date: Option<String>,
    #[serde(default)]
    pub places: Vec<CreatePlace>,
}
