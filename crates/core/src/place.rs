//! Place defaults and persistence rules.

/// Notes attached to a place when the client omits the field.
pub const DEFAULT_PLACE_NOTES: &str = "Хочу відвідати";

/// Serde default for the `notes` field of a place creation request.
///
/// Only applies when the field is absent; an explicit `null` stays `None`.
pub fn default_notes() -> Option<String> {
    Some(DEFAULT_PLACE_NOTES.to_string())
}

/// Whether a requested place carries a catalog reference worth validating
/// and storing. Places with an empty `external_id` are dropped silently.
pub fn has_external_ref(external_id: &str) -> bool {
    !external_id.is_empty()
}
