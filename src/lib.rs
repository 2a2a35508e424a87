//! TutorHub: a university tutoring-support desktop client.
//!
//! Three portals share one window: students find tutors and manage their
//! sessions, tutors publish weekly availability on a drag-to-select grid,
//! and admins oversee users, classes and feedback. All data is seeded
//! in-memory demo content; nothing persists between runs.

pub mod models;
pub mod services;
pub mod ui;
