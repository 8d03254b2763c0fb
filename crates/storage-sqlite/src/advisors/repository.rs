use advisor_core::advisors::{AdvisorProfile, AdvisorRepositoryTrait};
use advisor_core::errors::Error;
use advisor_core::repository::{Entity, QuerySource, RepositoryTrait};
use advisor_core::Result;

use super::model::AdvisorProfileDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::advisor_profiles;
use crate::schema::advisor_profiles::dsl::*;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

fn decode_all(rows: Vec<AdvisorProfileDB>) -> Result<Vec<AdvisorProfile>> {
    rows.into_iter()
        .map(|row| AdvisorProfile::try_from(row).map_err(Error::from))
        .collect()
}

fn find_row(conn: &mut SqliteConnection, key: &str) -> Result<Option<AdvisorProfileDB>> {
    Ok(advisor_profiles
        .find(key)
        .select(AdvisorProfileDB::as_select())
        .first::<AdvisorProfileDB>(conn)
        .optional()
        .map_err(StorageError::from)?)
}

pub struct AdvisorRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AdvisorRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AdvisorRepository { pool, writer }
    }
}

#[async_trait]
impl RepositoryTrait<AdvisorProfile> for AdvisorRepository {
    async fn create(&self, entity: AdvisorProfile) -> Result<AdvisorProfile> {
        let row = AdvisorProfileDB::from(entity);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<AdvisorProfile> {
                let stored = diesel::insert_into(advisor_profiles::table)
                    .values(&row)
                    .returning(AdvisorProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(AdvisorProfile::try_from(stored)?)
            })
            .await
    }

    async fn get(&self, key: Uuid) -> Result<Option<AdvisorProfile>> {
        let mut conn = get_connection(&self.pool)?;
        find_row(&mut conn, &key.to_string())?
            .map(|row| AdvisorProfile::try_from(row).map_err(Error::from))
            .transpose()
    }

    async fn get_all(&self) -> Result<Vec<AdvisorProfile>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = advisor_profiles
            .select(AdvisorProfileDB::as_select())
            .order(sql::<BigInt>("rowid"))
            .load::<AdvisorProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        decode_all(rows)
    }

    async fn get_all_queryable(&self) -> Result<Box<dyn QuerySource<AdvisorProfile>>> {
        Ok(Box::new(AdvisorProfileQuery {
            pool: Arc::clone(&self.pool),
        }))
    }

    async fn update(&self, key: Uuid, mut entity: AdvisorProfile) -> Result<AdvisorProfile> {
        entity.set_id(key);
        let row = AdvisorProfileDB::from(entity);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<AdvisorProfile> {
                let affected = diesel::update(advisor_profiles.find(row.id.clone()))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "{} with Id '{}' not found.",
                        AdvisorProfile::NAME,
                        row.id
                    )));
                }
                Ok(AdvisorProfile::try_from(row)?)
            })
            .await
    }

    async fn delete(&self, key: Uuid) -> Result<Option<AdvisorProfile>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<AdvisorProfile>> {
                let key = key.to_string();
                let Some(existing) = find_row(conn, &key)? else {
                    return Ok(None);
                };
                diesel::delete(advisor_profiles.find(key))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(AdvisorProfile::try_from(existing)?))
            })
            .await
    }
}

#[async_trait]
impl AdvisorRepositoryTrait for AdvisorRepository {
    async fn find_by_sin(&self, value: &str) -> Result<Option<AdvisorProfile>> {
        let mut conn = get_connection(&self.pool)?;
        advisor_profiles
            .filter(sin.eq(value))
            .select(AdvisorProfileDB::as_select())
            .first::<AdvisorProfileDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(|row| AdvisorProfile::try_from(row).map_err(Error::from))
            .transpose()
    }
}

/// The advisor table as a pageable query: `COUNT(*)` plus `LIMIT/OFFSET`
/// in insertion order.
pub struct AdvisorProfileQuery {
    pool: Arc<DbPool>,
}

#[async_trait]
impl QuerySource<AdvisorProfile> for AdvisorProfileQuery {
    async fn count(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let total: i64 = advisor_profiles
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(usize::try_from(total).unwrap_or(0))
    }

    async fn window(&self, offset: usize, limit: usize) -> Result<Vec<AdvisorProfile>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = advisor_profiles
            .select(AdvisorProfileDB::as_select())
            .order(sql::<BigInt>("rowid"))
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .offset(i64::try_from(offset).unwrap_or(i64::MAX))
            .load::<AdvisorProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        decode_all(rows)
    }
}
