//! Error types shared by the market tools

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading game data or talking to remote services
#[derive(Debug, Error)]
pub enum Error {
    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON could not be parsed or produced
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generated data file has not been created yet
    #[error("Cannot load {}, {hint}", .path.display())]
    MissingDataFile { path: PathBuf, hint: &'static str },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("HTTP error {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Item catalogue contained a key that is not a numeric ID
    #[error("Invalid item ID: {0}")]
    InvalidItemId(String),
}

/// Result alias for market_common operations
pub type Result<T> = std::result::Result<T, Error>;
