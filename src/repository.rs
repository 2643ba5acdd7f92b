//! # Item Repository
//!
//! Adapts the photo API to catalog items. Every operation maps raw records
//! through [`DisplayItem::from_remote`]; sorted and search fetches always use
//! the first page with a fixed window of [`FETCH_ALL_WINDOW`] items.

pub mod silent;

pub use silent::SilentRepository;

use crate::api::{ApiError, PageRequest, PhotoApi};
use crate::models::{sort_remote_items, DisplayItem, RemoteItem, SortOption};
use async_trait::async_trait;

/// Number of items requested when sorting or searching the whole catalog
pub const FETCH_ALL_WINDOW: u32 = 100;

/// Result type shared by repository operations
pub type RepositoryResult = Result<Vec<DisplayItem>, ApiError>;

/// Catalog operations consumed by the view model
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// One page of items in upstream order
    async fn get_paginated_items(&self, request: PageRequest) -> RepositoryResult;

    /// A fresh fetch of the first window, sorted ascending by `option`
    async fn get_sorted_items(&self, option: SortOption) -> RepositoryResult;

    /// Server-side search narrowed to items whose name or brand contain `query`
    async fn search_items(&self, query: &str) -> RepositoryResult;
}

/// Repository backed by a [`PhotoApi`]
#[derive(Debug, Clone)]
pub struct RemoteItemRepository<A> {
    api: A,
}

impl<A: PhotoApi> RemoteItemRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn fetch_all_window() -> PageRequest {
        PageRequest::new(1, FETCH_ALL_WINDOW)
    }
}

fn to_display_items(items: Vec<RemoteItem>) -> Vec<DisplayItem> {
    items.into_iter().map(DisplayItem::from_remote).collect()
}

#[async_trait]
impl<A: PhotoApi> ItemRepository for RemoteItemRepository<A> {
    async fn get_paginated_items(&self, request: PageRequest) -> RepositoryResult {
        let items = self.api.fetch_page(request).await?;
        tracing::debug!(
            "Fetched {} items for page {} (per_page {})",
            items.len(),
            request.page(),
            request.per_page()
        );
        Ok(to_display_items(items))
    }

    async fn get_sorted_items(&self, option: SortOption) -> RepositoryResult {
        let mut items = self.api.fetch_page(Self::fetch_all_window()).await?;
        sort_remote_items(&mut items, option);
        tracing::debug!("Fetched {} items sorted by {}", items.len(), option);
        Ok(to_display_items(items))
    }

    async fn search_items(&self, query: &str) -> RepositoryResult {
        let items = self.api.search(query, Self::fetch_all_window()).await?;
        let total = items.len();
        let display_items: Vec<DisplayItem> = to_display_items(items)
            .into_iter()
            .filter(|item| crate::models::matches_query(item, query))
            .collect();
        tracing::debug!(
            "Search '{}' returned {} items, {} kept after filtering",
            query,
            total,
            display_items.len()
        );
        Ok(display_items)
    }
}
