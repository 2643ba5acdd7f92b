//! # CatalogViewModel - Screen State Coordinator
//!
//! The view model owns the [`ScreenState`] of one catalog screen and is the
//! only consumer of the [`ItemRepository`]. State lives in a `tokio::sync::watch`
//! channel so the view can subscribe to every published change while only the
//! view model writes.
//!
//! Two families of operations exist side by side:
//!
//! - `apply_sort` / `apply_search` transform the items already on screen.
//! - `fetch_sorted` / `search_remote` go back to the repository, which
//!   re-fetches the first window from the network.

pub mod screen;

pub use screen::{Screen, DEFAULT_PER_PAGE};

use crate::api::PageRequest;
use crate::models::{matches_query, sort_display_items, ScreenState, SortOption, FIRST_PAGE};
use crate::repository::{ItemRepository, RepositoryResult, SilentRepository};
use std::sync::Arc;
use tokio::sync::watch;

/// How repository failures reach the screen state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Failures are recorded in [`ScreenState::error`] and the list is cleared
    #[default]
    Surface,
    /// Failures look like an empty result; `error` is never set
    Silent,
}

/// Clears `is_loading` if a fetch is abandoned before it publishes its result.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ScreenState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|s| std::mem::replace(&mut s.is_loading, false));
    }
}

/// The view model behind the catalog screen
pub struct CatalogViewModel {
    repository: Arc<dyn ItemRepository>,
    state: watch::Sender<ScreenState>,
}

impl CatalogViewModel {
    /// Create a view model that surfaces repository errors
    pub fn new(repository: impl ItemRepository + 'static) -> Self {
        Self::with_error_mode(repository, ErrorMode::default())
    }

    pub fn with_error_mode(repository: impl ItemRepository + 'static, mode: ErrorMode) -> Self {
        let repository: Arc<dyn ItemRepository> = match mode {
            ErrorMode::Surface => Arc::new(repository),
            ErrorMode::Silent => Arc::new(SilentRepository::new(repository)),
        };
        let (state, _) = watch::channel(ScreenState::new());
        tracing::debug!("Created CatalogViewModel ({:?} errors)", mode);
        Self { repository, state }
    }

    // =================================================================
    // Read-only view
    // =================================================================

    /// Snapshot of the current state
    pub fn state(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.state.subscribe()
    }

    // =================================================================
    // Operations
    // =================================================================

    /// Replace the items with the first page of the catalog.
    pub async fn load_initial(&self, per_page: u32) {
        let request = PageRequest::new(FIRST_PAGE, per_page);
        let _guard = self.begin_loading();
        let result = self.repository.get_paginated_items(request).await;
        self.finish_loading(result, |_| {});
    }

    /// Sort the items currently on screen.
    pub fn apply_sort(&self, option: SortOption) {
        self.state.send_modify(|s| {
            s.sort_option = option;
            sort_display_items(&mut s.items, option);
        });
        tracing::debug!("Sorted items on screen by {}", option);
    }

    /// Keep only the items on screen whose name or brand contain `query`.
    pub fn apply_search(&self, query: &str) {
        self.state
            .send_modify(|s| s.items.retain(|item| matches_query(item, query)));
        tracing::debug!("Filtered items on screen with '{}'", query);
    }

    /// Replace the items with a freshly fetched window sorted by `option`.
    pub async fn fetch_sorted(&self, option: SortOption) {
        let _guard = self.begin_loading();
        let result = self.repository.get_sorted_items(option).await;
        self.finish_loading(result, |s| s.sort_option = option);
    }

    /// Replace the items with the results of a server-side search.
    pub async fn search_remote(&self, query: &str) {
        let _guard = self.begin_loading();
        let result = self.repository.search_items(query).await;
        self.finish_loading(result, |_| {});
    }

    fn begin_loading(&self) -> LoadingGuard<'_> {
        self.state.send_modify(|s| s.is_loading = true);
        LoadingGuard { state: &self.state }
    }

    fn finish_loading(&self, result: RepositoryResult, update: impl FnOnce(&mut ScreenState)) {
        self.state.send_modify(|s| {
            match result {
                Ok(items) => {
                    tracing::debug!("Publishing {} items", items.len());
                    s.items = items;
                    s.error = None;
                }
                Err(e) => {
                    tracing::warn!("Fetch failed: {}", e);
                    s.items.clear();
                    s.error = Some(e);
                }
            }
            update(s);
            s.is_loading = false;
        });
    }
}
