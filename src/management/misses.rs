use std::path::Path;

use chrono::Utc;

use crate::{
    Res,
    types::{MissRecord, MissReport},
};

/// Collects the entries that could not be resolved and writes the miss
/// report at run end. The report is written even when no entry missed.
#[derive(Debug)]
pub struct MissReportManager {
    playlist_name: String,
    misses: Vec<MissRecord>,
}

impl MissReportManager {
    pub fn new(playlist_name: String) -> Self {
        Self {
            playlist_name,
            misses: Vec::new(),
        }
    }

    pub fn add(&mut self, artist: &str, album: &str) {
        self.misses.push(MissRecord {
            artist: artist.to_string(),
            album: album.to_string(),
        });
    }

    pub fn misses(&self) -> &[MissRecord] {
        &self.misses
    }

    pub fn count(&self) -> usize {
        self.misses.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let report = MissReport {
            generated_at: Utc::now().to_rfc3339(),
            playlist_name: self.playlist_name.clone(),
            misses: self.misses.clone(),
        };
        serde_json::to_string_pretty(&report)
    }

    pub async fn persist(&self, path: &Path) -> Res<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = self.to_json()?;
        async_fs::write(path, json).await?;
        Ok(())
    }
}
