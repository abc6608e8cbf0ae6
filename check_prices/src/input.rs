//! Input list parsing
//!
//! Each input file is a header-less CSV of `name,quantity,market` rows. A
//! quantity of 0 asks for the selling price, anything else for the cost of
//! buying that many units.

use crate::error::{Error, Result};
use crate::item::{ItemRecord, HQ_SUFFIX};
use market_common::data::strip_bom;
use market_common::{ItemMappings, MarketRegistry};
use std::path::Path;

/// High-quality glyph the game client inserts when copying an HQ item name
const HQ_GLYPH: char = '\u{e03c}';

/// Split a trailing HQ marker off an item name
pub fn split_hq(name: &str) -> (&str, bool) {
    if let Some(base) = name.strip_suffix(HQ_SUFFIX) {
        (base, true)
    } else if let Some(base) = name.strip_suffix(HQ_GLYPH) {
        (base, true)
    } else {
        (name, false)
    }
}

/// Parse one input list into item records.
///
/// `source` names the input in error messages. Records are returned in row
/// order, one per item ID the name maps to. The first invalid row aborts.
pub fn parse_input(
    text: &str,
    source: &str,
    mappings: &ItemMappings,
    registry: &MarketRegistry,
) -> Result<Vec<ItemRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(strip_bom(text).as_bytes());

    let mut items = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);
        let field = |i: usize| record.get(i).unwrap_or("");

        let raw_name = field(0);
        if raw_name.is_empty() {
            continue;
        }
        let (name, hq) = split_hq(raw_name);

        let Some(ids) = mappings.get(name) else {
            return Err(Error::UnknownItem {
                file: source.to_string(),
                line,
                name: name.to_string(),
            });
        };

        let quantity_str = field(1);
        let want_quantity: u32 = quantity_str.parse().map_err(|_| Error::InvalidQuantity {
            file: source.to_string(),
            line,
            value: quantity_str.to_string(),
        })?;

        let market_str = field(2);
        let Some(market) = registry.canonicalize(market_str) else {
            return Err(Error::UnknownMarket {
                file: source.to_string(),
                line,
                market: market_str.to_string(),
            });
        };

        for item_id in ids {
            items.push(ItemRecord::new(item_id, name, hq, want_quantity, market));
        }
    }

    log::debug!("Parsed {} item record(s) from {}", items.len(), source);
    Ok(items)
}

/// Read and parse an input list file
pub fn read_input_file(
    path: &Path,
    mappings: &ItemMappings,
    registry: &MarketRegistry,
) -> Result<Vec<ItemRecord>> {
    log::info!("Reading input list: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_input(&text, &path.display().to_string(), mappings, registry)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
