use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer token returned by the token endpoint. Lives in memory for the
/// duration of one run; never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// State of one authorization attempt, shared between the flow driver and the
/// callback handler. `completed` flips on the first callback, valid or not.
#[derive(Debug, Clone)]
pub struct PkceSession {
    pub code_verifier: String,
    pub state: String,
    pub token: Option<Token>,
    pub completed: bool,
}

/// One input line, already split into its artist and album halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub artist: String,
    pub album: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

/// A catalog album as returned by album search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumCandidate {
    pub id: String,
    pub name: String,
    pub artists: Vec<AlbumArtist>,
}

impl AlbumCandidate {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAlbumsResponse {
    pub albums: SearchAlbumsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAlbumsPage {
    pub items: Vec<AlbumCandidate>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

/// One page of an album's track listing. `next` is a complete URL for the
/// following page, or null on the last one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<Track>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

/// An entry no catalog album could be determined for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissRecord {
    pub artist: String,
    pub album: String,
}

/// The report written at the end of every run, even when `misses` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissReport {
    pub generated_at: String,
    pub playlist_name: String,
    pub misses: Vec<MissRecord>,
}

#[derive(Tabled)]
pub struct MissTableRow {
    pub artist: String,
    pub album: String,
}
