//! Advisor repository and service traits.
//!
//! These traits define the contract for advisor operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use uuid::Uuid;

use super::advisors_model::{AdvisorProfile, NewAdvisorProfile};
use crate::errors::Result;
use crate::pagination::PagedResult;
use crate::repository::RepositoryTrait;

/// Repository for advisor profiles.
///
/// Implementations must enforce SIN uniqueness on every write and report a
/// duplicate as [`crate::errors::DatabaseError::UniqueViolation`].
#[async_trait]
pub trait AdvisorRepositoryTrait: RepositoryTrait<AdvisorProfile> {
    /// Finds the profile holding `sin`, if any.
    async fn find_by_sin(&self, sin: &str) -> Result<Option<AdvisorProfile>>;
}

/// Write-side advisor operations.
#[async_trait]
pub trait AdvisorCommandServiceTrait: Send + Sync {
    /// Validates, assigns a health status, checks SIN uniqueness and persists.
    async fn create_advisor(&self, new_profile: NewAdvisorProfile) -> Result<AdvisorProfile>;

    /// Validates and replaces the profile stored under `id`.
    async fn update_advisor(&self, id: Uuid, profile: NewAdvisorProfile)
        -> Result<AdvisorProfile>;

    /// Removes the profile, returning it if it existed.
    async fn delete_advisor(&self, id: Uuid) -> Result<Option<AdvisorProfile>>;
}

/// Read-side advisor operations.
#[async_trait]
pub trait AdvisorQueryServiceTrait: Send + Sync {
    async fn get_advisors(&self) -> Result<Vec<AdvisorProfile>>;

    async fn get_advisors_paged(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PagedResult<AdvisorProfile>>;

    /// `Ok(None)` when no profile has this id.
    async fn get_advisor(&self, id: Uuid) -> Result<Option<AdvisorProfile>>;
}
