//! Sequential paginated harvest.
//!
//! The [`Harvester`] reads page 0 to learn how many pages exist, then walks
//! the remaining pages in increasing order and concatenates their records.
//! The page count is fixed once page 0 has been read:
//! - a server-reported `nbPages` is trusted as-is
//! - otherwise it is derived as `ceil(nbHits / page_size)`
//! - `nbHits == 0` stops after page 0
//!
//! Any fetch failure aborts the whole harvest; no partial collection is
//! returned.

use std::num::NonZeroU32;
use std::ops::Range;
use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::model::{Page, Record};
use crate::traits::{FetchError, PageSource};

// ============================================================================
// Result Types
// ============================================================================

/// Complete harvest result with the collection and statistics.
#[derive(Debug)]
pub struct HarvestResult {
    /// Every record from every page, in page order then within-page order.
    pub records: Vec<Record>,

    pub stats: HarvestStats,
}

impl HarvestResult {
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Statistics about the harvest operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarvestStats {
    /// `nbHits` as reported on page 0
    pub total_hits: u64,

    /// Planned page count: `nbPages` when reported, else derived from
    /// `nbHits`. Recorded as-is even when `nbHits == 0` stops after page 0.
    pub total_pages: u64,

    /// Number of page requests actually issued
    pub pages_fetched: u64,

    pub records_collected: usize,

    pub total_duration_ms: u64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(thiserror::Error, Debug)]
pub enum HarvestError {
    /// A page could not be fetched or decoded
    #[error("Failed to fetch page {page}: {source}")]
    Fetch {
        page: u64,
        #[source]
        source: FetchError,
    },
}

impl HarvestError {
    pub(crate) fn fetch(page: u64) -> impl FnOnce(FetchError) -> Self {
        move |source| HarvestError::Fetch { page, source }
    }
}

// ============================================================================
// Page Planning
// ============================================================================

/// Total page count implied by the first page of a listing.
///
/// Trusts the server's `nbPages` when present, even if it disagrees with
/// `nbHits`.
pub fn plan_total_pages(first: &Page, page_size: NonZeroU32) -> u64 {
    first
        .total_pages
        .unwrap_or_else(|| first.total_hits().div_ceil(u64::from(page_size.get())))
}

/// Accumulates pages into a collection once page 0 has fixed the loop bound.
///
/// Shared by the blocking and async harvesters so both walk pages the same
/// way.
#[derive(Debug)]
pub(crate) struct Collector {
    records: Vec<Record>,
    stats: HarvestStats,
    started: Instant,
}

impl Collector {
    pub(crate) fn start(first: Page, page_size: NonZeroU32, started: Instant) -> Self {
        let stats = HarvestStats {
            total_hits: first.total_hits(),
            total_pages: plan_total_pages(&first, page_size),
            pages_fetched: 1,
            ..HarvestStats::default()
        };

        info!(
            total_hits = stats.total_hits,
            total_pages = stats.total_pages,
            "Listing size known"
        );

        Self {
            records: first.results,
            stats,
            started,
        }
    }

    /// Pages still to fetch after page 0. Empty when there were no hits.
    pub(crate) fn remaining_pages(&self) -> Range<u64> {
        if self.stats.total_hits == 0 {
            return 1..1;
        }
        1..self.stats.total_pages.max(1)
    }

    pub(crate) fn push(&mut self, page_index: u64, page: Page) {
        debug!(
            page = page_index,
            records = page.results.len(),
            "Page received"
        );
        self.stats.pages_fetched += 1;
        self.records.extend(page.results);
    }

    pub(crate) fn finish(mut self) -> HarvestResult {
        self.stats.records_collected = self.records.len();
        self.stats.total_duration_ms = self.started.elapsed().as_millis() as u64;

        info!(
            records = self.stats.records_collected,
            pages = self.stats.pages_fetched,
            duration_ms = self.stats.total_duration_ms,
            "Harvest completed"
        );

        HarvestResult {
            records: self.records,
            stats: self.stats,
        }
    }
}

// ============================================================================
// Harvester
// ============================================================================

/// Blocking paginated harvester.
///
/// # Example
///
/// ```ignore
/// use chart_harvester::{Harvester, HttpPageSource, SearchConfig};
///
/// let config = SearchConfig::default();
/// let source = HttpPageSource::new(&config)?;
/// let result = Harvester::new(source).harvest()?;
/// println!("Fetched {} charts", result.records.len());
/// ```
pub struct Harvester<S>
where
    S: PageSource,
{
    source: S,
}

impl<S> Harvester<S>
where
    S: PageSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches every page in order and concatenates the records.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Fetch`] naming the first page whose fetch or
    /// decode failed. Pages after it are never requested.
    #[instrument(skip(self), fields(source = self.source.source_name(), page_size = self.source.page_size().get()))]
    pub fn harvest(&self) -> Result<HarvestResult, HarvestError> {
        let started = Instant::now();

        info!("Fetching page 0 to get total count");
        let first = self
            .source
            .fetch_page(0)
            .map_err(HarvestError::fetch(0))?;

        let mut collector = Collector::start(first, self.source.page_size(), started);
        let remaining = collector.remaining_pages();
        let total_pages = remaining.end;

        for page in remaining {
            info!(page = page + 1, total_pages, "Fetching page");
            let data = self
                .source
                .fetch_page(page)
                .map_err(HarvestError::fetch(page))?;
            collector.push(page, data);
        }

        Ok(collector.finish())
    }
}

// ============================================================================
// Tests
// ============================================================================
