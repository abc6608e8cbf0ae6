//! Update Game Data - refreshes the lookup files check_prices depends on
//!
//! Item names come from the TeamCraft item catalogue (every client language),
//! market names from the Universalis world and data center lists.

pub mod catalogue;
pub mod markets;
pub mod updater;

pub use catalogue::{build_item_mappings, ItemCatalogue, DEFAULT_ITEMS_URL};
pub use markets::{build_market_registry, DataCenter, World};
pub use updater::GameDataUpdater;
