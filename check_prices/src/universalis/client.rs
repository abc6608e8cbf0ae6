//! HTTP implementation of [`MarketDataSource`] against the Universalis API

use super::models::{AggregatedPrice, AggregatedResponse, Listing, MultiListingResponse};
use super::MarketDataSource;
use crate::error::Result;
use async_trait::async_trait;
use market_common::{encode_segment, get_json, ItemId};
use std::collections::HashMap;
use std::time::Duration;

const LISTING_FIELDS: [&str; 3] = ["listings.quantity", "listings.total", "listings.tax"];

/// Universalis API client.
///
/// One `reqwest::Client` is shared by every call, which keeps the connection
/// alive across the sequential batches of a run.
pub struct UniversalisClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl UniversalisClient {
    /// Creates a client for the given host, e.g. `https://universalis.app`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        log::debug!("Creating Universalis client for {}", base_url);
        Ok(Self {
            client: market_common::build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/api/v2/aggregated/{market}/{ids}`
    pub fn aggregated_url(&self, market: &str, ids: &[ItemId]) -> String {
        format!(
            "{}/api/v2/aggregated/{}/{}",
            self.base_url,
            encode_segment(market),
            join_ids(ids)
        )
    }

    /// `{base}/api/v2/{market}/{ids}?fields=...`, in single- or multi-item form.
    ///
    /// Universalis drops the `items` wrapper when exactly one ID is requested,
    /// and the field selectors have to match the shape that comes back.
    pub fn listings_url(&self, market: &str, ids: &[ItemId], hq: bool) -> String {
        let prefix = if ids.len() == 1 { "" } else { "items." };
        let velocity = if hq { "hqSaleVelocity" } else { "nqSaleVelocity" };
        let fields = LISTING_FIELDS
            .iter()
            .copied()
            .chain(std::iter::once(velocity))
            .map(|field| format!("{prefix}{field}"))
            .collect::<Vec<_>>()
            .join(",");

        let mut url = format!(
            "{}/api/v2/{}/{}?fields={}",
            self.base_url,
            encode_segment(market),
            join_ids(ids),
            fields
        );
        if hq {
            url.push_str("&hq=1");
        }
        url
    }
}

fn join_ids(ids: &[ItemId]) -> String {
    let joined = ids
        .iter()
        .map(ItemId::to_string)
        .collect::<Vec<_>>()
        .join(",");
    encode_segment(&joined)
}

#[async_trait]
impl MarketDataSource for UniversalisClient {
    async fn aggregated(&self, market: &str, ids: &[ItemId]) -> Result<Vec<AggregatedPrice>> {
        let url = self.aggregated_url(market, ids);
        let response: AggregatedResponse = get_json(&self.client, &url).await?;
        log::debug!(
            "Aggregated prices for {} of {} items on {}",
            response.results.len(),
            ids.len(),
            market
        );
        Ok(response.results)
    }

    async fn listings(
        &self,
        market: &str,
        ids: &[ItemId],
        hq: bool,
    ) -> Result<HashMap<ItemId, Listing>> {
        let url = self.listings_url(market, ids, hq);
        match ids {
            [] => Ok(HashMap::new()),
            [id] => {
                let listing: Listing = get_json(&self.client, &url).await?;
                Ok(HashMap::from([(*id, listing)]))
            }
            _ => {
                let response: MultiListingResponse = get_json(&self.client, &url).await?;
                Ok(response.items)
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
