//! Grouping of item records into request batches

use crate::item::ItemRecord;
use std::collections::BTreeMap;

/// What kind of lookup a record needs.
///
/// Variant order is the dispatch order: selling lookups first, then normal
/// quality buys, then high quality buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestKind {
    Sell,
    BuyNQ,
    BuyHQ,
}

impl RequestKind {
    /// Request kind for a record, from its quality flag and wanted quantity
    pub fn for_item(hq: bool, want_quantity: u32) -> Self {
        match (want_quantity, hq) {
            (0, _) => RequestKind::Sell,
            (_, true) => RequestKind::BuyHQ,
            (_, false) => RequestKind::BuyNQ,
        }
    }

    pub fn is_hq(&self) -> bool {
        matches!(self, RequestKind::BuyHQ)
    }
}

/// Records sharing a key can be fetched with the same remote query.
///
/// Keys order by kind first and market name second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestKey {
    pub kind: RequestKind,
    pub market: String,
}

impl RequestKey {
    pub fn for_item(item: &ItemRecord) -> Self {
        Self {
            kind: RequestKind::for_item(item.hq, item.want_quantity),
            market: item.market.clone(),
        }
    }
}

/// Item records plus their grouping by [`RequestKey`].
///
/// Records are owned here and addressed by their insertion index, so the
/// resolver can fan a single result out to several records without shared
/// mutable references.
#[derive(Debug, Default)]
pub struct RequestQueue {
    items: Vec<ItemRecord>,
    groups: BTreeMap<RequestKey, Vec<usize>>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a record under its request key, returning its index
    pub fn add(&mut self, item: ItemRecord) -> usize {
        let index = self.items.len();
        let key = RequestKey::for_item(&item);
        self.groups.entry(key).or_default().push(index);
        self.items.push(item);
        index
    }

    /// All records, in insertion order
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ItemRecord> {
        self.items
    }

    /// Pending keys and the record indices under each, in dispatch order
    pub fn groups(&self) -> impl Iterator<Item = (&RequestKey, &[usize])> {
        self.groups.iter().map(|(key, indices)| (key, indices.as_slice()))
    }

    /// Number of pending keys
    pub fn pending_keys(&self) -> usize {
        self.groups.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take the pending groups out, leaving the records in place
    pub(crate) fn drain(&mut self) -> (BTreeMap<RequestKey, Vec<usize>>, &mut [ItemRecord]) {
        (std::mem::take(&mut self.groups), self.items.as_mut_slice())
    }
}
