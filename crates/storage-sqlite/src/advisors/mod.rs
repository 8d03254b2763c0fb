//! SQLite storage implementation for advisor profiles.

mod model;
mod repository;

pub use model::AdvisorProfileDB;
pub use repository::{AdvisorProfileQuery, AdvisorRepository};
