//! # Photo API
//!
//! The upstream data source: two GET endpoints (listing and search) returning
//! photo records that the catalog reinterprets as products.

pub mod client;
pub mod dto;
pub mod error;

pub use client::{HttpPhotoApi, PageRequest, PhotoApi};
pub use error::ApiError;
