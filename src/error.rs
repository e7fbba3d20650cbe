use thiserror::Error;

use crate::harvest::HarvestError;

/// Top-level error for the command-line tools.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Harvest failed: {0}")]
    Harvest(#[from] HarvestError),

    #[error("Page source error: {0}")]
    Fetch(#[from] crate::traits::FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
