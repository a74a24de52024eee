use crate::{management::OverrideManager, spotify, types::AlbumCandidate, utils};

/// Result window for each search phase; neither phase paginates.
const SEARCH_LIMIT: u32 = 10;

/// Outcome of resolving one entry to a catalog album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The override table forced this id; no search was performed.
    Override(String),
    /// A search candidate was selected.
    Matched(String),
    /// Neither phase produced a candidate.
    Miss,
}

/// Resolves an (artist, album) pair to a catalog album id.
///
/// The override table short-circuits everything: a hit is returned without
/// any network call. Otherwise two search phases run in order:
///
/// - **Strict**: a field-qualified query, accepting only exact
///   normalized-name matches — album and primary artist together first,
///   album alone second.
/// - **Loose**: a free-text query, preferring candidates by the right artist
///   but falling back to the whole result set when no candidate claims the
///   right artist; within the pool, a candidate whose name contains the
///   target album (subtitle and edition noise) beats plain pool order.
pub async fn resolve(
    artist: &str,
    album: &str,
    overrides: &OverrideManager,
    token: &str,
) -> Result<Resolution, reqwest::Error> {
    if let Some(id) = overrides.lookup(artist, album) {
        return Ok(Resolution::Override(id));
    }

    let target_artist = utils::normalize(artist);
    let target_album = utils::normalize(album);

    let strict_query = format!("album:{} artist:{}", album, artist);
    let candidates = spotify::search::search_albums(&strict_query, SEARCH_LIMIT, token).await?;
    if let Some(candidate) = pick_strict(&candidates, &target_artist, &target_album) {
        return Ok(Resolution::Matched(candidate.id.clone()));
    }

    let loose_query = format!("{} {}", artist, album);
    let candidates = spotify::search::search_albums(&loose_query, SEARCH_LIMIT, token).await?;
    match pick_loose(&candidates, &target_artist, &target_album) {
        Some(candidate) => Ok(Resolution::Matched(candidate.id.clone())),
        None => Ok(Resolution::Miss),
    }
}

/// Strict-phase selection: exact normalized match on album and primary
/// artist, then exact match on album alone. Candidates are scanned in the
/// order the search service returned them.
pub fn pick_strict<'a>(
    candidates: &'a [AlbumCandidate],
    target_artist: &str,
    target_album: &str,
) -> Option<&'a AlbumCandidate> {
    candidates
        .iter()
        .find(|c| {
            utils::normalize(&c.name) == target_album
                && c.primary_artist()
                    .is_some_and(|a| utils::normalize(a) == target_artist)
        })
        .or_else(|| {
            candidates
                .iter()
                .find(|c| utils::normalize(&c.name) == target_album)
        })
}

/// Loose-phase selection over a free-text result set.
///
/// The pool is the artist-correct subset when it is non-empty, the full
/// result set otherwise. Within the pool, substring containment of the
/// target album name wins over plain pool order.
pub fn pick_loose<'a>(
    candidates: &'a [AlbumCandidate],
    target_artist: &str,
    target_album: &str,
) -> Option<&'a AlbumCandidate> {
    let by_artist: Vec<&AlbumCandidate> = candidates
        .iter()
        .filter(|c| {
            c.primary_artist()
                .is_some_and(|a| utils::normalize(a) == target_artist)
        })
        .collect();

    let pool: Vec<&AlbumCandidate> = if by_artist.is_empty() {
        candidates.iter().collect()
    } else {
        by_artist
    };

    pool.iter()
        .find(|c| utils::normalize(&c.name).contains(target_album))
        .copied()
        .or_else(|| pool.first().copied())
}
