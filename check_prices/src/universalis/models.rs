//! Universalis response payloads

use market_common::{ItemId, MarketKind};
use serde::Deserialize;
use std::collections::HashMap;

/// `GET /api/v2/aggregated/{market}/{ids}`
#[derive(Debug, Deserialize, Default)]
pub struct AggregatedResponse {
    #[serde(default)]
    pub results: Vec<AggregatedPrice>,
}

/// Aggregated figures for one item, both qualities
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPrice {
    pub item_id: ItemId,
    #[serde(default)]
    pub nq: Option<QualityAggregate>,
    #[serde(default)]
    pub hq: Option<QualityAggregate>,
}

impl AggregatedPrice {
    pub fn quality(&self, hq: bool) -> Option<&QualityAggregate> {
        if hq {
            self.hq.as_ref()
        } else {
            self.nq.as_ref()
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct QualityAggregate {
    #[serde(default)]
    pub min_listing: Option<ScopedValues<PricePoint>>,
    #[serde(default)]
    pub daily_sale_velocity: Option<ScopedValues<VelocityPoint>>,
}

impl QualityAggregate {
    /// Lowest listing price within the given market scope
    pub fn min_price(&self, kind: MarketKind) -> Option<f64> {
        self.min_listing.as_ref()?.get(kind)?.price
    }

    /// Units sold per day within the given market scope
    pub fn daily_velocity(&self, kind: MarketKind) -> Option<f64> {
        self.daily_sale_velocity.as_ref()?.get(kind)?.quantity
    }
}

/// A figure reported separately for the world, data center and region scopes
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScopedValues<T> {
    #[serde(default)]
    pub world: Option<T>,
    #[serde(default)]
    pub dc: Option<T>,
    #[serde(default)]
    pub region: Option<T>,
}

impl<T> ScopedValues<T> {
    pub fn get(&self, kind: MarketKind) -> Option<&T> {
        match kind {
            MarketKind::World => self.world.as_ref(),
            MarketKind::Dc => self.dc.as_ref(),
            MarketKind::Region => self.region.as_ref(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PricePoint {
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VelocityPoint {
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// Multi-item form: listings wrapped in an `items` map keyed by item ID
#[derive(Debug, Deserialize, Default)]
pub struct MultiListingResponse {
    #[serde(default)]
    pub items: HashMap<ItemId, Listing>,
}

/// Listings of one item on one market.
///
/// The single-item response is exactly this object, the multi-item response
/// nests one per ID; both decode into this form.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Price tiers, cheapest first
    #[serde(default)]
    pub listings: Vec<ListingTier>,
    #[serde(default)]
    pub nq_sale_velocity: Option<f64>,
    #[serde(default)]
    pub hq_sale_velocity: Option<f64>,
}

impl Listing {
    pub fn sale_velocity(&self, hq: bool) -> Option<f64> {
        if hq {
            self.hq_sale_velocity
        } else {
            self.nq_sale_velocity
        }
    }
}

/// One block of units offered at a single unit price
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ListingTier {
    pub quantity: u64,
    /// Price of the whole tier, before tax
    pub total: u64,
    pub tax: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_price_reads_scoped_values() {
        let json = r#"{
            "results": [{
                "itemId": 5057,
                "nq": {
                    "minListing": {
                        "world": { "price": 12, "worldId": 63 },
                        "dc": { "price": 9 },
                        "region": { "price": 7 }
                    },
                    "dailySaleVelocity": {
                        "world": { "quantity": 1.5 },
                        "dc": { "quantity": 12.25 }
                    }
                },
                "hq": {}
            }],
            "failedItems": []
        }"#;

        let response: AggregatedResponse = serde_json::from_str(json).unwrap();
        let price = &response.results[0];
        assert_eq!(price.item_id, 5057);

        let nq = price.quality(false).unwrap();
        assert_eq!(nq.min_price(MarketKind::World), Some(12.0));
        assert_eq!(nq.min_price(MarketKind::Dc), Some(9.0));
        assert_eq!(nq.daily_velocity(MarketKind::Dc), Some(12.25));
        assert_eq!(nq.daily_velocity(MarketKind::Region), None);

        let hq = price.quality(true).unwrap();
        assert_eq!(hq.min_price(MarketKind::World), None);
    }

    #[test]
    fn multi_listing_response_keys_by_numeric_id() {
        let json = r#"{
            "items": {
                "5057": {
                    "listings": [{ "quantity": 3, "total": 30, "tax": 1 }],
                    "nqSaleVelocity": 4.5
                },
                "5058": { "listings": [] }
            }
        }"#;

        let response: MultiListingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        let listing = &response.items[&5057];
        assert_eq!(
            listing.listings,
            vec![ListingTier { quantity: 3, total: 30, tax: 1 }]
        );
        assert_eq!(listing.sale_velocity(false), Some(4.5));
        assert_eq!(listing.sale_velocity(true), None);
        assert!(response.items[&5058].listings.is_empty());
    }

    #[test]
    fn single_listing_decodes_without_wrapper() {
        let json = r#"{
            "listings": [{ "quantity": 1, "total": 100, "tax": 5 }],
            "hqSaleVelocity": 0.75
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.listings.len(), 1);
        assert_eq!(listing.sale_velocity(true), Some(0.75));
    }
}
