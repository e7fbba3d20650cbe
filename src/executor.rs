use crate::harvest::pipeline::{Collector, HarvestError, HarvestResult};
use crate::model::Page;
use crate::traits::{AsyncPageSource, FetchError, PageSource};
use async_trait::async_trait;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Async variant of [`crate::Harvester`].
///
/// Pages are still awaited one at a time and in order; this only lets the
/// harvest sit inside a tokio pipeline.
pub struct AsyncHarvester<S> {
    source: S,
}

impl<S> AsyncHarvester<S>
where
    S: AsyncPageSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[instrument(skip(self), fields(source = self.source.source_name(), page_size = self.source.page_size().get()))]
    pub async fn harvest(&self) -> Result<HarvestResult, HarvestError> {
        let started = Instant::now();

        info!("Fetching page 0 to get total count");
        let first = self
            .source
            .fetch_page(0)
            .await
            .map_err(HarvestError::fetch(0))?;

        let mut collector = Collector::start(first, self.source.page_size(), started);
        let remaining = collector.remaining_pages();
        let total_pages = remaining.end;

        for page in remaining {
            info!(page = page + 1, total_pages, "Fetching page");
            let data = self
                .source
                .fetch_page(page)
                .await
                .map_err(HarvestError::fetch(page))?;
            collector.push(page, data);
        }

        Ok(collector.finish())
    }
}

/// Runs a blocking [`PageSource`] on tokio's blocking pool.
pub struct BlockingSource<S> {
    inner: Arc<S>,
}

impl<S> BlockingSource<S>
where
    S: PageSource + 'static,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

#[async_trait]
impl<S> AsyncPageSource for BlockingSource<S>
where
    S: PageSource + 'static,
{
    fn source_name(&self) -> &str {
        self.inner.source_name()
    }

    fn page_size(&self) -> NonZeroU32 {
        self.inner.page_size()
    }

    async fn fetch_page(&self, page: u64) -> Result<Page, FetchError> {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || inner.fetch_page(page))
            .await
            .map_err(|e| FetchError::Source(format!("Task join error: {}", e)))?
    }
}
