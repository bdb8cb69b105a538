//! Project lifecycle rules: creation input checks and the deletion guard message.

use crate::error::CoreError;

/// Message returned when the deletion guard rejects a request.
pub const VISITED_PLACES_CONFLICT: &str = "Cannot delete project with visited places";

/// Validate a project name supplied at creation.
///
/// The field itself is enforced by deserialization; this rejects names that
/// are present but blank.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Error for a delete refused because one of the project's places has been
/// visited.
pub fn visited_places_conflict() -> CoreError {
    CoreError::Conflict(VISITED_PLACES_CONFLICT.to_string())
}
