//! # Terminal View
//!
//! Renders a [`ScreenState`] as plain text cards. The view only reads state;
//! all changes go through the view model.

use crate::models::{DisplayItem, ScreenState};
use std::fmt::Write;

const LOADING_LINE: &str = "Loading...";
const EMPTY_LINE: &str = "No items";

/// Render the whole screen
pub fn render_screen(state: &ScreenState) -> String {
    if state.is_loading {
        return format!("{LOADING_LINE}\n");
    }

    let mut out = String::new();
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
    }

    if state.items.is_empty() {
        out.push_str(EMPTY_LINE);
        out.push('\n');
        return out;
    }

    let _ = writeln!(
        out,
        "{} items (sorted by {})",
        state.items.len(),
        state.sort_option
    );
    for item in &state.items {
        out.push('\n');
        out.push_str(&render_card(item));
    }
    out
}

/// Render one product card
pub fn render_card(item: &DisplayItem) -> String {
    let name = if item.name.is_empty() {
        "(unnamed)"
    } else {
        item.name.as_str()
    };
    let mut card = String::new();
    let _ = writeln!(card, "{name}  ${:.2}", item.price);
    if !item.brand.is_empty() {
        let _ = writeln!(card, "  {}", item.brand);
    }
    let _ = writeln!(card, "  {}", item.image_url);
    card
}
