//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod place_repo;
pub mod project_repo;

pub use place_repo::PlaceRepo;
pub use project_repo::{DeleteOutcome, ProjectRepo};
