use crate::model::Page;
use async_trait::async_trait;
use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {status}")]
    Status { status: u16 },
    #[error("Failed to decode page: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),
    #[error("Page source error: {0}")]
    Source(String),
}

/// Anything that can hand back page `n` of a paginated listing.
pub trait PageSource: Send + Sync {
    /// Short identifier used in log events (e.g., a host name).
    fn source_name(&self) -> &str;

    /// Records per page the source requests. The harvester derives the page
    /// count from this when the server does not report one.
    fn page_size(&self) -> NonZeroU32;

    /// Fetches a single zero-based page, blocking until it arrives.
    fn fetch_page(&self, page: u64) -> Result<Page, FetchError>;
}

#[async_trait]
pub trait AsyncPageSource: Send + Sync {
    fn source_name(&self) -> &str;

    fn page_size(&self) -> NonZeroU32;

    async fn fetch_page(&self, page: u64) -> Result<Page, FetchError>;
}
