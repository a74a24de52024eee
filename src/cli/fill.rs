use std::path::PathBuf;

use tabled::Table;

use crate::{
    error, info,
    management::{MissReportManager, OverrideManager},
    resolver::{self, Resolution},
    spotify, success,
    types::{Entry, MissTableRow},
    utils, warning,
};

/// Runs one complete fill: list in, playlist out, miss report on disk.
///
/// Everything that can fail before network activity (list file, override
/// file, empty entry list) is checked up front. Authorization and playlist
/// creation failures abort the run before any track is touched; a resource
/// failure mid-run aborts immediately and leaves already-appended tracks in
/// place. Only resolution misses are survivable, and each one becomes
/// exactly one record in the report.
pub async fn fill(
    list: PathBuf,
    name: String,
    overrides_path: Option<PathBuf>,
    misses_path: PathBuf,
    public: bool,
) {
    let raw = match async_fs::read_to_string(&list).await {
        Ok(content) => content,
        Err(e) => error!("Cannot read list file {}: {}", list.display(), e),
    };

    let mut entries: Vec<Entry> = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match utils::parse_entry(line) {
            Some(entry) => entries.push(entry),
            None => warning!("Skipping malformed line: {}", line),
        }
    }

    if entries.is_empty() {
        error!("List file {} contains no entries.", list.display());
    }

    let overrides = match &overrides_path {
        Some(path) => match OverrideManager::load(path).await {
            Ok(overrides) => {
                info!(
                    "Loaded {} override(s) from {}",
                    overrides.len(),
                    path.display()
                );
                overrides
            }
            Err(e) => error!("Cannot read override file {}: {}", path.display(), e),
        },
        None => OverrideManager::default(),
    };

    info!("Requesting Spotify authorization...");
    let token = match spotify::auth::authorize().await {
        Ok(token) => token,
        Err(e) => error!("Authorization failed: {}", e),
    };
    success!("Authorization successful.");

    let user = match spotify::playlist::current_user(&token.access_token).await {
        Ok(user) => user,
        Err(e) => error!("Failed to fetch current user: {}", e),
    };

    let playlist = match spotify::playlist::create(&user.id, &name, public, &token.access_token)
        .await
    {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to create playlist: {}", e),
    };
    success!("Created playlist {}", playlist.name);

    let mut report = MissReportManager::new(name.clone());

    for entry in &entries {
        let resolution =
            match resolver::resolve(&entry.artist, &entry.album, &overrides, &token.access_token)
                .await
            {
                Ok(resolution) => resolution,
                Err(e) => error!("Search failed for {} - {}: {}", entry.artist, entry.album, e),
            };

        let album_id = match resolution {
            Resolution::Override(id) => {
                info!("{} - {}: override -> {}", entry.artist, entry.album, id);
                id
            }
            Resolution::Matched(id) => id,
            Resolution::Miss => {
                warning!("{} - {}: MISS", entry.artist, entry.album);
                report.add(&entry.artist, &entry.album);
                continue;
            }
        };

        let count = match ingest(&album_id, &playlist.id, &token.access_token).await {
            Ok(count) => count,
            Err(e) => error!(
                "Failed to add tracks for {} - {}: {}",
                entry.artist, entry.album, e
            ),
        };
        success!("{} - {}: OK ({} tracks)", entry.artist, entry.album, count);
    }

    if let Err(e) = report.persist(&misses_path).await {
        error!(
            "Failed to write miss report to {}: {}",
            misses_path.display(),
            e
        );
    }

    if report.count() > 0 {
        let rows: Vec<MissTableRow> = report
            .misses()
            .iter()
            .map(|m| MissTableRow {
                artist: m.artist.clone(),
                album: m.album.clone(),
            })
            .collect();
        warning!(
            "{} of {} entries could not be resolved (see {}):",
            report.count(),
            entries.len(),
            misses_path.display()
        );
        println!("{}", Table::new(rows));
    }

    success!("Playlist ready: {}", playlist.external_urls.spotify);
}

/// Fetches every track of the album and appends them to the playlist in
/// order, at most 100 URIs per append request, chunks submitted
/// sequentially. Returns how many tracks the album contributed.
async fn ingest(album_id: &str, playlist_id: &str, token: &str) -> Result<usize, reqwest::Error> {
    let tracks = spotify::albums::get_album_tracks(album_id, token).await?;
    let uris: Vec<String> = tracks.into_iter().map(|t| t.uri).collect();

    for chunk in uris.chunks(spotify::playlist::ADD_TRACKS_LIMIT) {
        spotify::playlist::add_tracks(playlist_id, chunk.to_vec(), token).await?;
    }

    Ok(uris.len())
}
