// Service module exports
// Each service is an in-memory repository seeded at construction and
// injected into the UI through the app context, so a persistence layer
// could later be substituted without touching presentation code.

pub mod auth;
pub mod availability;
pub mod catalog;
pub mod directory;
pub mod feedback;
pub mod resources;
pub mod sessions;
