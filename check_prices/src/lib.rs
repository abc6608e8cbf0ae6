//! Check Prices - FFXIV market board price checker
//!
//! Reads shopping/selling lists from CSV, batches the lookups per market and
//! request kind against Universalis, and writes a priced CSV report.

pub mod error;
pub mod input;
pub mod item;
pub mod pricing;
pub mod queue;
pub mod report;
pub mod resolver;
pub mod universalis;

pub use error::{Error, Result};
pub use input::{parse_input, read_input_file};
pub use item::ItemRecord;
pub use queue::{RequestKey, RequestKind, RequestQueue};
pub use report::write_report;
pub use resolver::{PriceResolver, MAX_IDS_PER_REQUEST};
pub use universalis::{MarketDataSource, UniversalisClient};
