pub mod dashboard;
pub mod profile;
pub mod resources;
pub mod schedule;
pub mod students;
pub mod tutoring_setup;
