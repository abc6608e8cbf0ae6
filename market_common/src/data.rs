//! Reading and writing the generated game data files

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;

/// Display name to item ID mapping file
pub const ITEM_MAPPINGS_FILE: &str = "item-mappings.json";

/// Market name to market kind file
pub const MARKET_LIST_FILE: &str = "market-list.json";

const MISSING_HINT: &str = "run update_game_data first";

/// Strips a leading UTF-8 byte order mark, if any
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Loads a JSON data file, tolerating a BOM.
///
/// A file that does not exist is reported as [`Error::MissingDataFile`] so the
/// user is told how to generate it.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingDataFile {
                path: path.to_path_buf(),
                hint: MISSING_HINT,
            })
        }
        Err(e) => return Err(e.into()),
    };

    log::debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(serde_json::from_str(strip_bom(&content))?)
}
