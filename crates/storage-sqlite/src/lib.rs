//! SQLite storage implementation for the advisor service.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `advisor-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The advisor profile repository
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.

pub mod advisors;
pub mod db;
pub mod errors;
pub mod schema;

pub use advisors::AdvisorRepository;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use advisor_core::errors::{DatabaseError, Error, Result};
