//! egui user interface: application shell, login, the availability grid
//! and the role-specific portal views.

pub mod app;
pub mod grid;
pub mod login;
pub mod views;

pub use app::TutorHubApp;
