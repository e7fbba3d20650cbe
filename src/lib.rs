pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod harvest;
pub mod logging;
pub mod model;
pub mod report;
pub mod traits;

// Re-export common types for convenience
pub use client::HttpPageSource;
pub use config::{SearchConfig, ShapeConfig};
pub use error::AppError;
pub use executor::{AsyncHarvester, BlockingSource};
pub use harvest::{HarvestError, HarvestResult, HarvestStats, Harvester, Shaper};
pub use model::*;
pub use traits::*;
