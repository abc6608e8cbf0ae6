//! Market Common - shared building blocks for the FFXIV market tools
//!
//! Holds the on-disk game data files (item name mappings and the market
//! registry), the market kind taxonomy used by Universalis, URL helpers and
//! the shared error type.

pub mod data;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod items;
pub mod market;

pub use data::{ITEM_MAPPINGS_FILE, MARKET_LIST_FILE};
pub use endpoints::{encode_segment, market_page_url, DEFAULT_UNIVERSALIS_URL, USER_AGENT};
pub use error::{Error, Result};
pub use http::{build_client, get_json};
pub use items::{natural_cmp, ItemId, ItemMappings};
pub use market::{MarketKind, MarketRegistry};
