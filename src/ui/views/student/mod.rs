pub mod courses;
pub mod dashboard;
pub mod feedback;
pub mod find_tutor;
pub mod profile;
pub mod resources;
pub mod schedule;
