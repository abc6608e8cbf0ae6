//! Item display name to item ID mappings

use crate::data::read_json;
use crate::error::Result;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Write as _;
use std::path::Path;

/// Numeric game item identifier
pub type ItemId = u32;

/// Lookup from a display name (any client language) to the item IDs carrying it.
///
/// Several IDs can share a name, e.g. the same item in different languages or
/// event variants, so every lookup yields an ascending list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemMappings {
    names: HashMap<String, BTreeSet<ItemId>>,
}

impl ItemMappings {
    /// Load mappings from `item-mappings.json`
    pub fn load(path: &Path) -> Result<Self> {
        let raw: HashMap<String, Vec<ItemId>> = read_json(path)?;
        let mappings: Self = raw
            .into_iter()
            .flat_map(|(name, ids)| ids.into_iter().map(move |id| (name.clone(), id)))
            .collect();
        log::info!("Loaded {} item names from {}", mappings.len(), path.display());
        Ok(mappings)
    }

    /// Register `id` under `name`; empty names are ignored
    pub fn insert(&mut self, name: &str, id: ItemId) {
        if name.is_empty() {
            return;
        }
        self.names.entry(name.to_string()).or_default().insert(id);
    }

    /// Item IDs for an exact, case-sensitive display name
    pub fn get(&self, name: &str) -> Option<impl Iterator<Item = ItemId> + '_> {
        self.names.get(name).map(|ids| ids.iter().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render as JSON with one name per line, names in natural order
    pub fn to_json(&self) -> Result<String> {
        let mut entries: Vec<_> = self.names.iter().collect();
        entries.sort_by(|(a, _), (b, _)| natural_cmp(a, b));

        let mut out = String::from("{");
        for (i, (name, ids)) in entries.into_iter().enumerate() {
            out.push_str(if i == 0 { "\n  " } else { ",\n  " });
            out.push_str(&serde_json::to_string(name)?);
            out.push_str(": [");
            for (j, id) in ids.iter().enumerate() {
                if j > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{id}");
            }
            out.push(']');
        }
        out.push_str("\n}\n");
        Ok(out)
    }

    /// Write `item-mappings.json`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Stored {} item names to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromIterator<(String, ItemId)> for ItemMappings {
    fn from_iter<I: IntoIterator<Item = (String, ItemId)>>(iter: I) -> Self {
        let mut mappings = Self::default();
        for (name, id) in iter {
            mappings.insert(&name, id);
        }
        mappings
    }
}

/// Compares strings treating embedded digit runs as numbers ("Item 2" < "Item 10")
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let left = take_digits(&mut a);
                let right = take_digits(&mut b);
                let left_trim = left.trim_start_matches('0');
                let right_trim = right.trim_start_matches('0');
                let ord = left_trim
                    .len()
                    .cmp(&right_trim.len())
                    .then_with(|| left_trim.cmp(right_trim))
                    .then_with(|| left.len().cmp(&right.len()));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn natural_order_compares_numbers_by_value() {
        assert_eq!(natural_cmp("Materia 2", "Materia 10"), Ordering::Less);
        assert_eq!(natural_cmp("Materia 10", "Materia 10"), Ordering::Equal);
        assert_eq!(natural_cmp("Apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Grade 3", "Grade"), Ordering::Greater);
    }

    #[test]
    fn insert_deduplicates_and_sorts_ids() {
        let mut mappings = ItemMappings::default();
        mappings.insert("Cotton Boll", 5346);
        mappings.insert("Cotton Boll", 12);
        mappings.insert("Cotton Boll", 5346);
        mappings.insert("", 99);

        let ids: Vec<_> = mappings.get("Cotton Boll").unwrap().collect();
        assert_eq!(ids, vec![12, 5346]);
        assert_eq!(mappings.len(), 1);
        assert!(mappings.get("cotton boll").is_none());
    }

    #[test]
    fn to_json_is_line_per_name_in_natural_order() {
        let mappings: ItemMappings = vec![
            ("Grade 10 Tincture".to_string(), 3),
            ("Grade 2 Tincture".to_string(), 2),
            ("Grade 2 Tincture".to_string(), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            mappings.to_json().unwrap(),
            "{\n  \"Grade 2 Tincture\": [1, 2],\n  \"Grade 10 Tincture\": [3]\n}\n"
        );
    }

    #[test]
    fn load_reads_saved_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "{{\n  \"Zinc Ore\": [5114],\n  \"Ice Shard\": [3, 4]\n}}\n").unwrap();

        let mappings = ItemMappings::load(tmp.path()).unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings.get("Ice Shard").unwrap().collect::<Vec<_>>(), vec![3, 4]);
    }
}
