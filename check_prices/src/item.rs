//! Item records: one unit of price demand and its resolved result

use market_common::ItemId;

/// Suffix marking a high-quality item in input and report names
pub const HQ_SUFFIX: &str = "[HQ]";

/// One requested (item, quality, quantity, market) combination.
///
/// Created during input parsing, filled in exactly once by the resolver and
/// then read by the report writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub item_id: ItemId,
    pub name: String,
    pub hq: bool,
    /// Zero means "what would I get selling this", anything else is a buy
    pub want_quantity: u32,
    /// Canonical market name
    pub market: String,
    pub(crate) result_available: bool,
    pub(crate) actual_quantity: Option<u64>,
    pub(crate) price_each: Option<f64>,
    pub(crate) sells_per_day: Option<f64>,
}

impl ItemRecord {
    pub fn new(
        item_id: ItemId,
        name: impl Into<String>,
        hq: bool,
        want_quantity: u32,
        market: impl Into<String>,
    ) -> Self {
        Self {
            item_id,
            name: name.into(),
            hq,
            want_quantity,
            market: market.into(),
            result_available: false,
            actual_quantity: None,
            price_each: None,
            sells_per_day: None,
        }
    }

    /// Whether a selling price (rather than a buying price) was requested
    pub fn is_sell(&self) -> bool {
        self.want_quantity == 0
    }

    /// Display name with the `[HQ]` suffix for high-quality records
    pub fn name_with_hq(&self) -> String {
        if self.hq {
            format!("{}{}", self.name, HQ_SUFFIX)
        } else {
            self.name.clone()
        }
    }

    /// Universalis market board page for this item
    pub fn market_url(&self) -> String {
        market_common::market_page_url(self.item_id)
    }

    /// True once the resolver has processed this record.
    ///
    /// A resolved record without a price means the market has no matching
    /// listings; it is not an error.
    pub fn result_available(&self) -> bool {
        self.result_available
    }

    /// Units obtainable (buying) or the requested quantity (selling)
    pub fn actual_quantity(&self) -> Option<u64> {
        self.actual_quantity
    }

    /// Signed unit price excluding the 5% sales tax.
    ///
    /// Buying prices are positive: what you pay per unit. Selling prices are
    /// stored negated: the lowest current listing, i.e. what you would
    /// receive per unit. Consumers summing a shopping list can therefore add
    /// `price_each * quantity` across rows to get a net cost.
    pub fn price_each(&self) -> Option<f64> {
        self.price_each
    }

    /// Average units sold per day
    pub fn sells_per_day(&self) -> Option<f64> {
        self.sells_per_day
    }

    /// Record a buying price; the only writer of a positive `price_each`
    pub(crate) fn set_buying_price(&mut self, unit_price: f64) {
        self.price_each = Some(unit_price);
    }

    /// Record a selling price; negated here and nowhere else
    pub(crate) fn set_selling_price(&mut self, unit_price: f64) {
        self.price_each = Some(-unit_price);
    }
}
