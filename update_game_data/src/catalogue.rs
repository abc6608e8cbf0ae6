//! TeamCraft item catalogue

use market_common::{Error, ItemMappings, Result};
use std::collections::HashMap;

/// Item names per language, as published by TeamCraft
pub const DEFAULT_ITEMS_URL: &str = "https://raw.githubusercontent.com/ffxiv-teamcraft/ffxiv-teamcraft/master/libs/data/src/lib/json/items.json";

/// `{"<item id>": {"<language>": "<name>"}}`
pub type ItemCatalogue = HashMap<String, HashMap<String, String>>;

/// Map every non-empty name in any language to the IDs that carry it.
///
/// Fails on the first key that is not a plain decimal ID.
pub fn build_item_mappings(catalogue: &ItemCatalogue) -> Result<ItemMappings> {
    let mut mappings = ItemMappings::default();
    for (key, names) in catalogue {
        let id = parse_item_id(key)?;
        for name in names.values() {
            mappings.insert(name, id);
        }
    }
    Ok(mappings)
}

fn parse_item_id(key: &str) -> Result<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidItemId(key.to_string()));
    }
    key.parse()
        .map_err(|_| Error::InvalidItemId(key.to_string()))
}
