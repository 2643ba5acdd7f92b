//! Screen lifetime scope
//!
//! A [`Screen`] runs every view model operation as its own tokio task and owns
//! those tasks. Dropping the screen aborts whatever is still pending. Tasks are
//! not ordered against each other: a sort scheduled while a load is in flight
//! may act on the old items and then be overwritten when the load publishes.

use super::{CatalogViewModel, ErrorMode};
use crate::models::{ScreenState, SortOption};
use crate::repository::ItemRepository;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;

/// Page size of the load scheduled when a screen opens
pub const DEFAULT_PER_PAGE: u32 = 20;

/// One visible catalog screen and the tasks scheduled on it.
///
/// Scheduling methods must be called from within a tokio runtime.
pub struct Screen {
    view_model: Arc<CatalogViewModel>,
    tasks: JoinSet<()>,
}

impl Screen {
    pub fn new(view_model: CatalogViewModel) -> Self {
        Self::from_shared(Arc::new(view_model))
    }

    pub fn from_shared(view_model: Arc<CatalogViewModel>) -> Self {
        Self {
            view_model,
            tasks: JoinSet::new(),
        }
    }

    /// Open a screen over `repository` and schedule the initial page load.
    pub fn open(repository: impl ItemRepository + 'static, mode: ErrorMode) -> Self {
        let mut screen = Self::new(CatalogViewModel::with_error_mode(repository, mode));
        screen.load_initial(DEFAULT_PER_PAGE);
        screen
    }

    pub fn view_model(&self) -> &Arc<CatalogViewModel> {
        &self.view_model
    }

    pub fn state(&self) -> ScreenState {
        self.view_model.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.view_model.subscribe()
    }

    /// Number of scheduled tasks not yet joined
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn load_initial(&mut self, per_page: u32) {
        let vm = self.view_model.clone();
        self.tasks.spawn(async move { vm.load_initial(per_page).await });
    }

    pub fn apply_sort(&mut self, option: SortOption) {
        let vm = self.view_model.clone();
        self.tasks.spawn(async move { vm.apply_sort(option) });
    }

    pub fn apply_search(&mut self, query: impl Into<String>) {
        let vm = self.view_model.clone();
        let query = query.into();
        self.tasks.spawn(async move { vm.apply_search(&query) });
    }

    pub fn fetch_sorted(&mut self, option: SortOption) {
        let vm = self.view_model.clone();
        self.tasks.spawn(async move { vm.fetch_sorted(option).await });
    }

    pub fn search_remote(&mut self, query: impl Into<String>) {
        let vm = self.view_model.clone();
        let query = query.into();
        self.tasks.spawn(async move { vm.search_remote(&query).await });
    }

    /// Wait for every task scheduled so far to finish.
    pub async fn settle(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    tracing::error!("Screen task panicked: {}", e);
                }
            }
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!("Closing screen, abandoning {} tasks", self.tasks.len());
        }
    }
}
