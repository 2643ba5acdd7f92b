//! # Catalog Models
//!
//! Pure data models for the catalog screen, with the sort and filter helpers
//! that both the repository and the view model apply to them.

pub mod item;
pub mod screen_state;
pub mod sort_option;

pub use item::{matches_query, sort_display_items, sort_remote_items, DisplayItem, RemoteItem};
pub use screen_state::{ScreenState, FIRST_PAGE};
pub use sort_option::SortOption;
