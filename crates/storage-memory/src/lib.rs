//! In-memory storage for the advisor service.
//!
//! Records live in a process-local vector guarded by a tokio `RwLock`, so
//! iteration order is insertion order and nothing survives a restart.

mod advisors;
mod repository;

pub use repository::InMemoryRepository;
