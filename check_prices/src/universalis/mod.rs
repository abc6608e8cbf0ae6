//! Universalis market data access
//!
//! [`MarketDataSource`] is the seam between the resolver and the network;
//! [`UniversalisClient`] is the production implementation.

mod client;
mod models;

pub use client::UniversalisClient;
pub use models::{
    AggregatedPrice, AggregatedResponse, Listing, ListingTier, MultiListingResponse, PricePoint,
    QualityAggregate, ScopedValues, VelocityPoint,
};

use crate::error::Result;
use async_trait::async_trait;
use market_common::ItemId;
use std::collections::HashMap;

/// Remote market data queries used by the resolver.
///
/// Implementations issue exactly one remote call per method invocation and
/// accept at most [`crate::MAX_IDS_PER_REQUEST`] IDs.
#[async_trait]
pub trait MarketDataSource {
    /// Aggregated minimum prices and sale velocities for selling lookups
    async fn aggregated(&self, market: &str, ids: &[ItemId]) -> Result<Vec<AggregatedPrice>>;

    /// Current listings for buying lookups, keyed by item ID.
    ///
    /// IDs without listings may be missing from the returned map.
    async fn listings(
        &self,
        market: &str,
        ids: &[ItemId],
        hq: bool,
    ) -> Result<HashMap<ItemId, Listing>>;
}
