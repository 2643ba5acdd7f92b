//! Compatibility wrapper that turns every repository failure into an empty list.
//!
//! With this wrapper a failed fetch looks exactly like an empty catalog to the
//! caller. The failure is still logged.

use super::{ItemRepository, RepositoryResult};
use crate::api::PageRequest;
use crate::models::SortOption;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct SilentRepository<R> {
    inner: R,
}

impl<R: ItemRepository> SilentRepository<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn swallow(operation: &str, result: RepositoryResult) -> RepositoryResult {
        match result {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("{} failed, returning no items: {}", operation, e);
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl<R: ItemRepository> ItemRepository for SilentRepository<R> {
    async fn get_paginated_items(&self, request: PageRequest) -> RepositoryResult {
        Self::swallow(
            "get_paginated_items",
            self.inner.get_paginated_items(request).await,
        )
    }

    async fn get_sorted_items(&self, option: SortOption) -> RepositoryResult {
        Self::swallow("get_sorted_items", self.inner.get_sorted_items(option).await)
    }

    async fn search_items(&self, query: &str) -> RepositoryResult {
        Self::swallow("search_items", self.inner.search_items(query).await)
    }
}
