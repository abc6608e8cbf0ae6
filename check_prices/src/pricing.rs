//! Price extraction: turning Universalis payloads into item record results

use crate::item::ItemRecord;
use crate::universalis::{AggregatedPrice, Listing};
use market_common::MarketKind;

/// Removes the 5% sales tax included in listing totals (x / 1.05 == x * 20 / 21)
pub fn price_without_tax(total_price: u64, quantity: u64) -> f64 {
    (total_price as f64 * 20.0) / (quantity as f64 * 21.0)
}

/// Fill in a buying result from the listings of the record's item.
///
/// Tiers are consumed cheapest first until at least `want_quantity` units are
/// covered. The last tier is taken whole, so `actual_quantity` may exceed the
/// wanted amount. `None` means the item has no listings at all.
pub fn write_buying_price(item: &mut ItemRecord, listing: Option<&Listing>) {
    item.result_available = true;
    let Some(listing) = listing else {
        return;
    };

    let want = u64::from(item.want_quantity);
    let mut actual_quantity = 0u64;
    let mut total_price = 0u64;
    for tier in &listing.listings {
        if actual_quantity >= want {
            break;
        }
        actual_quantity += tier.quantity;
        total_price += tier.total + tier.tax;
    }

    if actual_quantity != 0 {
        item.actual_quantity = Some(actual_quantity);
        item.set_buying_price(price_without_tax(total_price, actual_quantity));
    }
    item.sells_per_day = listing.sale_velocity(item.hq);
}

/// Fill in a selling result from the aggregated figures of the record's item.
///
/// Missing quality, scope or value leaves that field unset; the record still
/// counts as resolved and `actual_quantity` always echoes `want_quantity`.
pub fn write_selling_price(
    item: &mut ItemRecord,
    price: Option<&AggregatedPrice>,
    kind: Option<MarketKind>,
) {
    item.result_available = true;
    item.actual_quantity = Some(u64::from(item.want_quantity));

    let (Some(quality), Some(kind)) = (price.and_then(|p| p.quality(item.hq)), kind) else {
        return;
    };
    if let Some(min_price) = quality.min_price(kind) {
        item.set_selling_price(min_price);
    }
    item.sells_per_day = quality.daily_velocity(kind);
}
