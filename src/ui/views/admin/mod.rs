pub mod catalog;
pub mod classes;
pub mod dashboard;
pub mod evaluation;
pub mod reports;
pub mod users;
