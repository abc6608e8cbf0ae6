//! Fetching and storing the game data files

use crate::catalogue::{build_item_mappings, ItemCatalogue};
use crate::markets::{build_market_registry, DataCenter, World};
use market_common::{
    get_json, ItemMappings, MarketRegistry, Result, ITEM_MAPPINGS_FILE, MARKET_LIST_FILE,
};
use std::path::Path;
use std::time::Duration;

/// Downloads item names and market lists and writes the lookup files
pub struct GameDataUpdater {
    pub(crate) client: reqwest::Client,
    pub(crate) items_url: String,
    pub(crate) base_url: String,
}

impl GameDataUpdater {
    pub fn new(items_url: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: market_common::build_client(timeout)?,
            items_url: items_url.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Download the item catalogue and build name mappings
    pub async fn fetch_item_mappings(&self) -> Result<ItemMappings> {
        log::info!("Loading item list from TeamCraft...");
        let catalogue: ItemCatalogue = get_json(&self.client, &self.items_url).await?;

        log::info!("Processing {} item entries...", catalogue.len());
        build_item_mappings(&catalogue)
    }

    /// Download data centers and worlds and build the market registry
    pub async fn fetch_market_registry(&self) -> Result<MarketRegistry> {
        log::info!("Loading market list from Universalis...");
        let data_centers: Vec<DataCenter> =
            get_json(&self.client, &format!("{}/api/v2/data-centers", self.base_url)).await?;
        let worlds: Vec<World> =
            get_json(&self.client, &format!("{}/api/v2/worlds", self.base_url)).await?;

        log::info!(
            "Fetched {} data centers and {} worlds",
            data_centers.len(),
            worlds.len()
        );
        Ok(build_market_registry(&data_centers, &worlds))
    }

    /// Refresh both files in `data_dir`.
    ///
    /// The mappings file is written before the market list is fetched, so a
    /// Universalis outage still leaves fresh item names behind.
    pub async fn update(&self, data_dir: &Path) -> Result<()> {
        let mappings = self.fetch_item_mappings().await?;
        mappings.save(&data_dir.join(ITEM_MAPPINGS_FILE))?;

        let registry = self.fetch_market_registry().await?;
        registry.save(&data_dir.join(MARKET_LIST_FILE))?;

        log::info!("Game data updated in {}", data_dir.display());
        Ok(())
    }
}
