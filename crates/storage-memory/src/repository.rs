use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

use advisor_core::errors::{DatabaseError, Error};
use advisor_core::repository::{Entity, QuerySource, RepositoryTrait};
use advisor_core::Result;

/// Generic store over any [`Entity`], enforcing its declared unique keys
/// and column checks.
pub struct InMemoryRepository<T: Entity> {
    pub(crate) records: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects `candidate` if another record (ignoring `skip_id`) already holds
/// one of its unique key values.
fn check_unique<T: Entity>(records: &[T], candidate: &T, skip_id: Option<Uuid>) -> Result<()> {
    let keys = candidate.unique_keys();
    if keys.is_empty() {
        return Ok(());
    }
    for other in records.iter().filter(|r| Some(r.id()) != skip_id) {
        let other_keys = other.unique_keys();
        if let Some((column, _)) = keys.iter().find(|k| other_keys.contains(*k)) {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "{}.{}",
                T::NAME,
                column
            ))));
        }
    }
    Ok(())
}

fn check_columns<T: Entity>(candidate: &T) -> Result<()> {
    match candidate.violated_check() {
        Some(column) => Err(Error::Database(DatabaseError::CheckViolation(format!(
            "{}.{}",
            T::NAME,
            column
        )))),
        None => Ok(()),
    }
}

#[async_trait]
impl<T: Entity> RepositoryTrait<T> for InMemoryRepository<T> {
    async fn create(&self, entity: T) -> Result<T> {
        check_columns(&entity)?;
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "{}.id",
                T::NAME
            ))));
        }
        check_unique(&records, &entity, None)?;
        records.push(entity.clone());
        debug!("Stored {} {}", T::NAME, entity.id());
        Ok(entity)
    }

    async fn get(&self, id: Uuid) -> Result<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn get_all_queryable(&self) -> Result<Box<dyn QuerySource<T>>> {
        Ok(Box::new(self.records.read().await.clone()))
    }

    async fn update(&self, id: Uuid, mut entity: T) -> Result<T> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(format!("{} with Id '{}' not found.", T::NAME, id)))?;
        entity.set_id(id);
        check_columns(&entity)?;
        check_unique(&records, &entity, Some(id))?;
        records[position] = entity.clone();
        debug!("Replaced {} {}", T::NAME, id);
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<T>> {
        let mut records = self.records.write().await;
        let removed = records
            .iter()
            .position(|r| r.id() == id)
            .map(|position| records.remove(position));
        if removed.is_some() {
            debug!("Removed {} {}", T::NAME, id);
        }
        Ok(removed)
    }
}
