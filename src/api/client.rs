//! # Photo API Client
//!
//! Reqwest-backed access to the photo listing and search endpoints. The
//! adapter owns transport details only: query parameters, the `Client-ID`
//! authorization header, status mapping and JSON decoding.

use crate::api::dto::{parse_item_list, parse_search_results};
use crate::api::ApiError;
use crate::config::ClientConfig;
use crate::models::RemoteItem;
use async_trait::async_trait;
use reqwest::{header, Client, Url};

const PHOTOS_PATH: &[&str] = &["photos"];
const SEARCH_PHOTOS_PATH: &[&str] = &["search", "photos"];

/// Page coordinates for a listing or search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Both values are clamped to at least 1.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

/// Source of raw catalog items
#[async_trait]
pub trait PhotoApi: Send + Sync {
    /// Fetch one page of the photo listing
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<RemoteItem>, ApiError>;

    /// Run a text search and return one page of matches
    async fn search(&self, query: &str, request: PageRequest)
        -> Result<Vec<RemoteItem>, ApiError>;
}

#[async_trait]
impl<A: PhotoApi + ?Sized> PhotoApi for std::sync::Arc<A> {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<RemoteItem>, ApiError> {
        (**self).fetch_page(request).await
    }

    async fn search(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<Vec<RemoteItem>, ApiError> {
        (**self).search(query, request).await
    }
}

/// Photo API client that performs HTTP GET requests against one base URL
#[derive(Debug, Clone)]
pub struct HttpPhotoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpPhotoApi {
    /// Build a client with reqwest's default transport settings.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Transport(format!(
                    "base URL '{}' cannot carry a path",
                    self.config.base_url()
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, query: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
        tracing::debug!("GET {} {:?}", url.path(), query);

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .header(
                header::AUTHORIZATION,
                format!("Client-ID {}", self.config.access_key()),
            )
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!("GET {} -> {} ({} bytes)", url.path(), status, body.len());

        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }
        Ok(body.to_vec())
    }
}

fn page_query(request: PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("page", request.page().to_string()),
        ("per_page", request.per_page().to_string()),
    ]
}

#[async_trait]
impl PhotoApi for HttpPhotoApi {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<RemoteItem>, ApiError> {
        let url = self.endpoint(PHOTOS_PATH)?;
        let body = self.get(url, &page_query(request)).await?;
        parse_item_list(&body)
    }

    async fn search(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<Vec<RemoteItem>, ApiError> {
        let url = self.endpoint(SEARCH_PHOTOS_PATH)?;
        let mut params = vec![("query", query.to_string())];
        params.extend(page_query(request));
        let body = self.get(url, &params).await?;
        parse_search_results(&body)
    }
}
