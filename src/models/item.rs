//! Catalog item models
//!
//! `RemoteItem` is the record as the photo API delivers it; `DisplayItem` is
//! what the screen shows. The upstream fields are repurposed: the color label
//! becomes the product name, the description becomes the brand and the like
//! count becomes the price. That mapping lives only in
//! [`DisplayItem::from_remote`].

use crate::models::SortOption;
use std::cmp::Ordering;

/// Raw item as decoded from the photo API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteItem {
    pub id: String,
    pub color_label: String,
    pub description_label: String,
    pub like_count: u32,
    pub image_url: String,
}

/// Item shown on the catalog screen
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub image_url: String,
}

impl DisplayItem {
    /// Map an upstream record onto the display shape.
    pub fn from_remote(remote: RemoteItem) -> Self {
        Self {
            id: remote.id,
            name: remote.color_label,
            brand: remote.description_label,
            price: f64::from(remote.like_count),
            image_url: remote.image_url,
        }
    }
}

impl From<RemoteItem> for DisplayItem {
    fn from(remote: RemoteItem) -> Self {
        Self::from_remote(remote)
    }
}

/// Case-insensitive substring match on name or brand.
///
/// An empty query matches every item.
pub fn matches_query(item: &DisplayItem, query: &str) -> bool {
    contains_ignore_case(&item.name, query) || contains_ignore_case(&item.brand, query)
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Stable ascending sort of display items by the given key
pub fn sort_display_items(items: &mut [DisplayItem], option: SortOption) {
    match option {
        SortOption::ByPrice => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::ByName => items.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

/// Stable ascending sort of raw items by the key a display sort would use
pub fn sort_remote_items(items: &mut [RemoteItem], option: SortOption) {
    items.sort_by(|a, b| compare_remote(a, b, option));
}

fn compare_remote(a: &RemoteItem, b: &RemoteItem, option: SortOption) -> Ordering {
    match option {
        SortOption::ByPrice => a.like_count.cmp(&b.like_count),
        SortOption::ByName => a.color_label.cmp(&b.color_label),
    }
}
