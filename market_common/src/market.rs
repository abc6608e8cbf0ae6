//! Market names and their kinds

use crate::data::read_json;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// Scope of a market: a single world, a data center, or a whole region.
///
/// The lowercase names double as the keys Universalis uses when it nests
/// aggregated figures per scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    World,
    Dc,
    Region,
}

impl MarketKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketKind::World => "world",
            MarketKind::Dc => "dc",
            MarketKind::Region => "region",
        }
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry of every known market name and its kind
#[derive(Debug, Default, Clone)]
pub struct MarketRegistry {
    kinds: BTreeMap<String, MarketKind>,
    folded: HashMap<String, String>,
}

impl MarketRegistry {
    /// Load the registry from `market-list.json`
    pub fn load(path: &Path) -> Result<Self> {
        let kinds: BTreeMap<String, MarketKind> = read_json(path)?;
        let registry: Self = kinds.into_iter().collect();
        log::info!("Loaded {} markets from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Register a market, replacing the kind of an existing entry
    pub fn insert(&mut self, name: &str, kind: MarketKind) {
        self.folded.insert(name.to_lowercase(), name.to_string());
        self.kinds.insert(name.to_string(), kind);
    }

    /// Kind of a market given its canonical name
    pub fn kind(&self, name: &str) -> Option<MarketKind> {
        self.kinds.get(name).copied()
    }

    /// Registered spelling of a market name, matched case-insensitively
    pub fn canonicalize(&self, name: &str) -> Option<&str> {
        self.folded.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Pretty JSON with sorted keys and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.kinds)?;
        out.push('\n');
        Ok(out)
    }

    /// Write `market-list.json`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Stored {} markets to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromIterator<(String, MarketKind)> for MarketRegistry {
    fn from_iter<I: IntoIterator<Item = (String, MarketKind)>>(iter: I) -> Self {
        let mut registry = Self::default();
        for (name, kind) in iter {
            registry.insert(&name, kind);
        }
        registry
    }
}
