//! Universalis world and data center lists

use market_common::{MarketKind, MarketRegistry};
use serde::Deserialize;

/// Entry of `GET /api/v2/data-centers`
#[derive(Debug, Deserialize, Clone)]
pub struct DataCenter {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub worlds: Vec<u32>,
}

/// Entry of `GET /api/v2/worlds`
#[derive(Debug, Deserialize, Clone)]
pub struct World {
    pub id: u32,
    pub name: String,
}

/// Every data center and region name, then every world name.
///
/// Worlds are registered last, so a world sharing a name with a data center
/// or region wins.
pub fn build_market_registry(data_centers: &[DataCenter], worlds: &[World]) -> MarketRegistry {
    let mut registry = MarketRegistry::default();
    for dc in data_centers {
        registry.insert(&dc.name, MarketKind::Dc);
        registry.insert(&dc.region, MarketKind::Region);
    }
    for world in worlds {
        registry.insert(&world.name, MarketKind::World);
    }
    registry
}
