//! Database models for advisor profiles.

use diesel::prelude::*;
use uuid::Uuid;

use advisor_core::advisors::AdvisorProfile;
use advisor_core::health_status::HealthStatus;

use crate::errors::StorageError;

/// Database model for advisor profiles
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::advisor_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AdvisorProfileDB {
    pub id: String,
    pub full_name: String,
    pub sin: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub health_status: String,
}

impl From<AdvisorProfile> for AdvisorProfileDB {
    fn from(domain: AdvisorProfile) -> Self {
        Self {
            id: domain.id.to_string(),
            full_name: domain.full_name,
            sin: domain.sin,
            address: domain.address,
            phone_number: domain.phone_number,
            health_status: domain.health_status.as_str().to_string(),
        }
    }
}

impl TryFrom<AdvisorProfileDB> for AdvisorProfile {
    type Error = StorageError;

    fn try_from(db: AdvisorProfileDB) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&db.id)
            .map_err(|e| StorageError::Decode(format!("advisor id '{}': {}", db.id, e)))?;
        let health_status = db
            .health_status
            .parse::<HealthStatus>()
            .map_err(|e| StorageError::Decode(format!("advisor {} health status: {}", id, e)))?;
        Ok(Self {
            id,
            full_name: db.full_name,
            sin: db.sin,
            address: db.address,
            phone_number: db.phone_number,
            health_status,
        })
    }
}
