//! Domain rules for the travel planner.
//!
//! Holds the shared id type, the error taxonomy, and the pure checks that
//! govern the project/place lifecycle. Nothing in this crate performs I/O.

pub mod error;
pub mod place;
pub mod project;
pub mod types;
