// Module exports for models

pub mod course;
pub mod feedback;
pub mod resource;
pub mod session;
pub mod slot;
pub mod subject;
pub mod user;
