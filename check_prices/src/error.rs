//! Error types for check_prices

use thiserror::Error;

/// Unified error type for check_prices operations
#[derive(Debug, Error)]
pub enum Error {
    /// Data file, HTTP or JSON failure from the shared layer
    #[error(transparent)]
    Common(#[from] market_common::Error),

    /// Item name has no entry in the item mappings
    #[error("{file}: Line {line}: Unknown item {name}. Item names are case sensitive")]
    UnknownItem { file: String, line: u64, name: String },

    /// Quantity column is not a non-negative integer
    #[error("{file}: Line {line}: The item quantity {value} is not a non-negative integer")]
    InvalidQuantity {
        file: String,
        line: u64,
        value: String,
    },

    /// Market column matches no world, data center or region
    #[error(
        "{file}: Line {line}: Market name {market} is neither a world name, a DC name, nor a region name"
    )]
    UnknownMarket {
        file: String,
        line: u64,
        market: String,
    },

    /// Malformed CSV input or failure writing the report
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for check_prices operations
pub type Result<T> = std::result::Result<T, Error>;
