//! Observable state of the catalog screen

use crate::api::ApiError;
use crate::models::{DisplayItem, SortOption};

/// Page the screen starts on
pub const FIRST_PAGE: u32 = 1;

/// Everything the catalog view renders
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// Items in display order (reflects the last sort or filter)
    pub items: Vec<DisplayItem>,
    /// A page fetch is in flight
    pub is_loading: bool,
    /// Reserved for incremental paging; never raised
    pub is_loading_more: bool,
    pub current_page: u32,
    pub sort_option: SortOption,
    /// Last fetch failure, only populated when errors are surfaced
    pub error: Option<ApiError>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            is_loading_more: false,
            current_page: FIRST_PAGE,
            sort_option: SortOption::default(),
            error: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}
