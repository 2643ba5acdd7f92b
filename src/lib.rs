//! # Storeline - Product Catalog over a Photo API
//!
//! Lists, sorts and searches catalog items sourced from a photo API.
//! Built with a small MVVM stack so the view layer stays replaceable.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  subscribe  ┌──────────────────┐  calls  ┌──────────────┐
//! │    View     │◄────────────│ CatalogViewModel │────────►│  Repository  │
//! │             │             │                  │         │              │
//! │ - Cards     │             │ - ScreenState    │         │ - Mapping    │
//! │ - Spinner   │             │ - Sort / search  │         │ - Sort/filter│
//! └─────────────┘             └──────────────────┘         └──────┬───────┘
//!        ▲                             ▲                          │
//!        │ operations                  │ tasks                    ▼
//!        │                      ┌──────────────┐          ┌──────────────┐
//!        └──────────────────────│    Screen    │          │   PhotoApi   │
//!                               │ (task scope) │          │ (HTTP + JSON)│
//!                               └──────────────┘          └──────────────┘
//! ```

pub mod api;
pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod models;
pub mod repository;
pub mod view_models;
pub mod views;

// Re-export main types for easy access
pub use api::{ApiError, HttpPhotoApi, PageRequest, PhotoApi};
pub use config::{ClientConfig, ConfigError};
pub use models::{DisplayItem, RemoteItem, ScreenState, SortOption};
pub use repository::{ItemRepository, RemoteItemRepository, SilentRepository};
pub use view_models::{CatalogViewModel, ErrorMode, Screen};
