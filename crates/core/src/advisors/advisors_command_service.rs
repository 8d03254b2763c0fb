use log::{error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::advisors_model::{AdvisorProfile, NewAdvisorProfile};
use super::advisors_traits::{AdvisorCommandServiceTrait, AdvisorRepositoryTrait};
use super::advisors_validator::ModelValidator;
use crate::errors::{Error, ErrorKind, Result, ValidationError};
use crate::health_status::HealthStatusGeneratorTrait;
use crate::repository::Entity;

/// Service for creating, updating and deleting advisor profiles.
pub struct AdvisorCommandService {
    repository: Arc<dyn AdvisorRepositoryTrait>,
    health_status_generator: Arc<dyn HealthStatusGeneratorTrait>,
    validator: Arc<dyn ModelValidator<NewAdvisorProfile>>,
}

impl AdvisorCommandService {
    pub fn new(
        repository: Arc<dyn AdvisorRepositoryTrait>,
        health_status_generator: Arc<dyn HealthStatusGeneratorTrait>,
        validator: Arc<dyn ModelValidator<NewAdvisorProfile>>,
    ) -> Self {
        Self {
            repository,
            health_status_generator,
            validator,
        }
    }

    fn validate(&self, operation: &str, profile: &NewAdvisorProfile) -> Result<()> {
        self.validator.validate(profile).inspect_err(|e| {
            warn!("Rejected advisor {}: {}", operation, e);
        })
    }
}

/// Logs store failures and folds a SIN unique violation into the same
/// validation error the pre-insert check produces.
fn map_store_error(operation: &str, err: Error) -> Error {
    if err.is_unique_violation() {
        warn!(
            "Rejected advisor {}: SIN already held by another profile",
            operation
        );
        return ValidationError::DuplicateSin.into();
    }
    if err.kind() == ErrorKind::Storage || err.kind() == ErrorKind::Unexpected {
        error!("Storage failure during advisor {}: {}", operation, err);
    }
    err
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!(
        "{} with Id '{}' not found.",
        AdvisorProfile::NAME,
        id
    ))
}

#[async_trait::async_trait]
impl AdvisorCommandServiceTrait for AdvisorCommandService {
    async fn create_advisor(&self, new_profile: NewAdvisorProfile) -> Result<AdvisorProfile> {
        info!("Creating advisor profile");
        self.validate("create", &new_profile)?;

        let profile = AdvisorProfile::create(new_profile, self.health_status_generator.as_ref());

        let existing = self
            .repository
            .find_by_sin(&profile.sin)
            .await
            .map_err(|e| map_store_error("create", e))?;
        if existing.is_some() {
            warn!("Rejected advisor create: SIN must be unique");
            return Err(ValidationError::DuplicateSin.into());
        }

        let created = self
            .repository
            .create(profile)
            .await
            .map_err(|e| map_store_error("create", e))?;
        info!(
            "Created advisor profile {} with health status {}",
            created.id, created.health_status
        );
        Ok(created)
    }

    async fn update_advisor(&self, id: Uuid, profile: NewAdvisorProfile) -> Result<AdvisorProfile> {
        info!("Updating advisor profile {}", id);
        self.validate("update", &profile)?;

        let existing = self
            .repository
            .get(id)
            .await
            .map_err(|e| map_store_error("update", e))?
            .ok_or_else(|| {
                warn!("Advisor profile {} not found for update", id);
                not_found(id)
            })?;

        // Identity comes from the path, health status from the stored record.
        let replacement = AdvisorProfile::from_input(id, profile, existing.health_status);
        let updated = self
            .repository
            .update(id, replacement)
            .await
            .map_err(|e| map_store_error("update", e))?;
        info!("Updated advisor profile {}", id);
        Ok(updated)
    }

    async fn delete_advisor(&self, id: Uuid) -> Result<Option<AdvisorProfile>> {
        info!("Deleting advisor profile {}", id);
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| map_store_error("delete", e))?;
        match &deleted {
            Some(_) => info!("Deleted advisor profile {}", id),
            None => warn!("Advisor profile {} not found for delete", id),
        }
        Ok(deleted)
    }
}
