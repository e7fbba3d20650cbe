//! Blocking HTTP page source for the search API.

use std::num::NonZeroU32;

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use crate::config::SearchConfig;
use crate::model::Page;
use crate::traits::{FetchError, PageSource};

/// Fetches pages from a search endpoint shaped like
/// `GET {base}?type=charts&hitsPerPage=100&page=0`.
///
/// Requests use the transport's default timeout and are never retried.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    base_url: Url,
    result_type: String,
    page_size: NonZeroU32,
    name: String,
}

impl HttpPageSource {
    /// Builds a client for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the base URL does not parse and
    /// [`FetchError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        // The search API rejects clients without a browser-like User-Agent.
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        let name = base_url.host_str().unwrap_or("search").to_string();

        Ok(Self {
            client,
            base_url,
            result_type: config.result_type.clone(),
            page_size: config.page_size,
            name,
        })
    }

    /// Full request URL for a zero-based page index.
    pub fn page_url(&self, page: u64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("type", &self.result_type)
            .append_pair("hitsPerPage", &self.page_size.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}

impl PageSource for HttpPageSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    fn fetch_page(&self, page: u64) -> Result<Page, FetchError> {
        let url = self.page_url(page);
        debug!(%url, "GET");

        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp.text()?;
        decode_page(&text)
    }
}

/// Decodes a response body into a [`Page`].
pub fn decode_page(body: &str) -> Result<Page, FetchError> {
    Ok(serde_json::from_str(body)?)
}
