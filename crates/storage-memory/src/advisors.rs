use async_trait::async_trait;

use advisor_core::advisors::{AdvisorProfile, AdvisorRepositoryTrait};
use advisor_core::Result;

use crate::InMemoryRepository;

#[async_trait]
impl AdvisorRepositoryTrait for InMemoryRepository<AdvisorProfile> {
    async fn find_by_sin(&self, sin: &str) -> Result<Option<AdvisorProfile>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.sin == sin).cloned())
    }
}
