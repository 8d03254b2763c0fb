//! Generic repository contracts.
//!
//! These traits describe persistence without any storage-specific types.
//! Concrete implementations live in the storage crates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;

/// A persisted record addressed by a UUID primary key.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    /// Column/value pairs that must be unique across the collection.
    ///
    /// Stores that cannot declare constraints up front use this to reject
    /// duplicates at write time.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Column checks beyond uniqueness, mirroring the relational schema.
    ///
    /// Returns the name of the first violated column.
    fn violated_check(&self) -> Option<&'static str> {
        None
    }
}

/// A read-only collection that can be counted and windowed.
#[async_trait]
pub trait QuerySource<T>: Send + Sync {
    /// Total number of records in the collection.
    async fn count(&self) -> Result<usize>;

    /// Up to `limit` records starting at `offset`, in collection order.
    async fn window(&self, offset: usize, limit: usize) -> Result<Vec<T>>;
}

#[async_trait]
impl<T: Clone + Send + Sync> QuerySource<T> for Vec<T> {
    async fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    async fn window(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        Ok(self.iter().skip(offset).take(limit).cloned().collect())
    }
}

/// Generic CRUD contract over a single entity type.
///
/// Implementations signal absence on reads and deletes with `None`; `update`
/// on a missing id is an error.
#[async_trait]
pub trait RepositoryTrait<T: Entity>: Send + Sync {
    /// Persists a new entity and returns it as stored.
    async fn create(&self, entity: T) -> Result<T>;

    async fn get(&self, id: Uuid) -> Result<Option<T>>;

    /// All entities in storage iteration order.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// The whole collection as a composable query for paging.
    async fn get_all_queryable(&self) -> Result<Box<dyn QuerySource<T>>>;

    /// Replaces the entity stored under `id`.
    ///
    /// Fails with [`crate::Error::NotFound`] when no such record exists.
    async fn update(&self, id: Uuid, entity: T) -> Result<T>;

    /// Removes the entity, returning it if it existed.
    async fn delete(&self, id: Uuid) -> Result<Option<T>>;
}
