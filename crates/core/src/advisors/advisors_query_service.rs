use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::advisors_model::AdvisorProfile;
use super::advisors_traits::{AdvisorQueryServiceTrait, AdvisorRepositoryTrait};
use crate::errors::Result;
use crate::pagination::{PagedResult, Paginator};

/// Service for reading advisor profiles.
pub struct AdvisorQueryService {
    repository: Arc<dyn AdvisorRepositoryTrait>,
    paginator: Paginator,
}

impl AdvisorQueryService {
    pub fn new(repository: Arc<dyn AdvisorRepositoryTrait>, paginator: Paginator) -> Self {
        Self {
            repository,
            paginator,
        }
    }
}

#[async_trait::async_trait]
impl AdvisorQueryServiceTrait for AdvisorQueryService {
    async fn get_advisors(&self) -> Result<Vec<AdvisorProfile>> {
        info!("Fetching all advisor profiles");
        self.repository.get_all().await
    }

    async fn get_advisors_paged(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PagedResult<AdvisorProfile>> {
        info!(
            "Fetching advisor profiles page {} (size {})",
            page_number, page_size
        );
        let query = self.repository.get_all_queryable().await?;
        self.paginator
            .paginate(query.as_ref(), page_number, page_size)
            .await
    }

    async fn get_advisor(&self, id: Uuid) -> Result<Option<AdvisorProfile>> {
        info!("Fetching advisor profile {}", id);
        let advisor = self.repository.get(id).await?;
        if advisor.is_none() {
            warn!("Advisor profile {} not found", id);
        }
        Ok(advisor)
    }
}
