//! Advisor Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for advisor profiles.
//! It is storage-agnostic and defines the repository traits that are
//! implemented by the `storage-memory` and `storage-sqlite` crates.

pub mod advisors;
pub mod errors;
pub mod health_status;
pub mod pagination;
pub mod repository;

// Re-export error types
pub use errors::Error;
pub use errors::ErrorKind;
pub use errors::Result;
