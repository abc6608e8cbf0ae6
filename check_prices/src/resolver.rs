//! Request dispatch: drains the queue into batched Universalis calls

use crate::error::Result;
use crate::item::ItemRecord;
use crate::pricing::{write_buying_price, write_selling_price};
use crate::queue::{RequestKind, RequestQueue};
use crate::universalis::{AggregatedPrice, MarketDataSource};
use market_common::{ItemId, MarketRegistry};
use std::collections::{BTreeMap, HashMap};

/// Most item IDs Universalis accepts in a single call
pub const MAX_IDS_PER_REQUEST: usize = 100;

/// Resolves prices for queued item records through a [`MarketDataSource`].
///
/// Calls are issued one at a time, in key order (selling lookups, then NQ
/// buys, then HQ buys, each by market name). Every record is written exactly
/// once.
pub struct PriceResolver<S> {
    registry: MarketRegistry,
    source: S,
    queue: RequestQueue,
}

impl<S: MarketDataSource> PriceResolver<S> {
    pub fn new(registry: MarketRegistry, source: S) -> Self {
        Self {
            registry,
            source,
            queue: RequestQueue::new(),
        }
    }

    /// Enqueue a record, returning its index in [`Self::items`]
    pub fn add(&mut self, item: ItemRecord) -> usize {
        self.queue.add(item)
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    /// All records in insertion order
    pub fn items(&self) -> &[ItemRecord] {
        self.queue.items()
    }

    pub fn into_items(self) -> Vec<ItemRecord> {
        self.queue.into_items()
    }

    /// Drain the queue, writing results onto the records.
    ///
    /// `progress` receives the running count of resolved records: once with 0
    /// before the first call and once after every batch. The first failing
    /// call aborts the whole resolution.
    pub async fn resolve<F>(&mut self, mut progress: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        let (groups, items) = self.queue.drain();
        let mut count = 0;
        progress(count);

        for (key, indices) in groups {
            let mut handles: BTreeMap<ItemId, Vec<usize>> = BTreeMap::new();
            for index in indices {
                handles.entry(items[index].item_id).or_default().push(index);
            }
            let ids: Vec<ItemId> = handles.keys().copied().collect();

            for batch in ids.chunks(MAX_IDS_PER_REQUEST) {
                log::info!(
                    "Requesting {:?} prices for {} item(s) on {}",
                    key.kind,
                    batch.len(),
                    key.market
                );

                match key.kind {
                    RequestKind::Sell => {
                        let prices = self.source.aggregated(&key.market, batch).await?;
                        let by_id: HashMap<ItemId, &AggregatedPrice> =
                            prices.iter().map(|p| (p.item_id, p)).collect();
                        let kind = self.registry.kind(&key.market);
                        if kind.is_none() {
                            log::warn!("Market {} is not in the market list", key.market);
                        }

                        for id in batch {
                            let price = by_id.get(id).copied();
                            if price.is_none() {
                                log::warn!("No aggregated data for item {} on {}", id, key.market);
                            }
                            for &index in &handles[id] {
                                write_selling_price(&mut items[index], price, kind);
                                count += 1;
                            }
                        }
                    }
                    RequestKind::BuyNQ | RequestKind::BuyHQ => {
                        let listings = self
                            .source
                            .listings(&key.market, batch, key.kind.is_hq())
                            .await?;

                        for id in batch {
                            let listing = listings.get(id);
                            if listing.is_none() {
                                log::warn!("No listings for item {} on {}", id, key.market);
                            }
                            for &index in &handles[id] {
                                write_buying_price(&mut items[index], listing);
                                count += 1;
                            }
                        }
                    }
                }

                progress(count);
            }
        }

        log::info!("Resolved {} item record(s)", count);
        Ok(())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
