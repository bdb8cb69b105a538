pub mod place;
pub mod project;
