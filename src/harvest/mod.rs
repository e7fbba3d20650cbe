//! Harvest module - paginated collection and record shaping.
//!
//! - **Pipeline**: sequential page walk via [`pipeline::Harvester`]
//! - **Shape**: projection of raw records via [`shape::Shaper`]

pub mod pipeline;
pub mod shape;

// Re-export commonly used types
pub use pipeline::{plan_total_pages, HarvestError, HarvestResult, HarvestStats, Harvester};
pub use shape::Shaper;
