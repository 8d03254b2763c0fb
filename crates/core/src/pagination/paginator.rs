use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::repository::QuerySource;

/// A window of a collection plus the size of the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_records: usize,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    /// Converts the items while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_records: self.total_records,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

/// Stateless skip/take paginator. Page numbers start at 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator;

impl Paginator {
    pub fn new() -> Self {
        Self
    }

    /// Counts the whole query, then fetches the requested page.
    ///
    /// A page past the end yields no items but still reports the true total.
    /// Non-positive `page_number` or `page_size` is a validation error.
    pub async fn paginate<T>(
        &self,
        query: &dyn QuerySource<T>,
        page_number: u32,
        page_size: u32,
    ) -> Result<PagedResult<T>> {
        if page_number == 0 {
            return Err(Error::invalid("pageNumber must be greater than 0."));
        }
        if page_size == 0 {
            return Err(Error::invalid("pageSize must be greater than 0."));
        }

        let total_records = query.count().await?;

        let offset = (page_number as usize - 1).saturating_mul(page_size as usize);
        let items = if offset >= total_records {
            Vec::new()
        } else {
            query.window(offset, page_size as usize).await?
        };

        Ok(PagedResult {
            items,
            total_records,
            page_number,
            page_size,
        })
    }
}
