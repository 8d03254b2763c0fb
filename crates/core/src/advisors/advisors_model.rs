//! Advisor profile domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::health_status::{HealthStatus, HealthStatusGeneratorTrait};
use crate::repository::Entity;

/// Stored phone numbers are exactly this many characters.
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// Domain model representing a persisted advisor profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorProfile {
    pub id: Uuid,
    pub full_name: String,
    /// Social insurance number, 9 digits. Sensitive.
    pub sin: String,
    pub address: Option<String>,
    /// Sensitive.
    pub phone_number: Option<String>,
    pub health_status: HealthStatus,
}

impl AdvisorProfile {
    /// Builds a profile for first persistence: fresh id, freshly drawn status.
    pub fn create(
        new_profile: NewAdvisorProfile,
        health_status_generator: &dyn HealthStatusGeneratorTrait,
    ) -> Self {
        Self::from_input(
            Uuid::new_v4(),
            new_profile,
            health_status_generator.generate(),
        )
    }

    /// Builds a profile from caller input under a fixed id and status.
    pub fn from_input(id: Uuid, input: NewAdvisorProfile, health_status: HealthStatus) -> Self {
        Self {
            id,
            full_name: input.full_name,
            sin: input.sin,
            address: input.address,
            phone_number: input.phone_number.filter(|p| !p.trim().is_empty()),
            health_status,
        }
    }
}

impl Entity for AdvisorProfile {
    const NAME: &'static str = "AdvisorProfile";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("sin", self.sin.clone())]
    }

    fn violated_check(&self) -> Option<&'static str> {
        match &self.phone_number {
            Some(phone) if phone.chars().count() != PHONE_NUMBER_LENGTH => Some("phone_number"),
            _ => None,
        }
    }
}

/// Caller-controlled fields of a profile, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvisorProfile {
    pub full_name: String,
    pub sin: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}
