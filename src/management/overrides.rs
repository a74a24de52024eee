use std::{collections::HashMap, path::Path};

use crate::Res;

/// Operator-supplied forced mappings from `"Artist - Album"` keys to catalog
/// album ids. Loaded once at startup, read-only for the run, and consulted
/// before any search.
#[derive(Debug, Default)]
pub struct OverrideManager {
    entries: HashMap<String, String>,
}

impl OverrideManager {
    pub async fn load(path: &Path) -> Res<Self> {
        let content = async_fs::read_to_string(path).await?;
        Ok(Self::from_json(&content)?)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Looks up the override for an entry, returning the bare album id. The
    /// stored value may be either an id or a `spotify:album:<id>` URI.
    pub fn lookup(&self, artist: &str, album: &str) -> Option<String> {
        let key = format!("{} - {}", artist, album);
        self.entries
            .get(&key)
            .map(|value| extract_album_id(value).to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts the id portion from a `scheme:album:<id>` URI; bare ids pass
/// through unchanged.
pub fn extract_album_id(value: &str) -> &str {
    value.rsplit(':').next().unwrap_or(value)
}
