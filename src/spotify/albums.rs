use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    spotify::MAX_RETRIES,
    types::{AlbumTracksResponse, Track},
    warning,
};

/// Page size for album track listings; the API allows up to 50.
const TRACKS_PAGE_LIMIT: u32 = 50;

/// Fetches the complete track listing of an album, in album order.
///
/// Each page carries an opaque `next` URL; the loop follows that chain until
/// it ends. The upstream contract guarantees the chain is finite, so no
/// iteration cap is imposed here.
///
/// Rate limits and server errors are retried the same way as searches,
/// bounded by [`MAX_RETRIES`] per page.
pub async fn get_album_tracks(album_id: &str, token: &str) -> Result<Vec<Track>, reqwest::Error> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut next_url = Some(format!(
        "{uri}/albums/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = album_id,
        limit = TRACKS_PAGE_LIMIT
    ));

    while let Some(api_url) = next_url {
        let mut attempts: u32 = 0;

        let page = loop {
            let client = Client::new();
            let response = client.get(&api_url).bearer_auth(token).send().await;

            let response = match response {
                Ok(resp) => {
                    if resp.status() == StatusCode::TOO_MANY_REQUESTS && attempts < MAX_RETRIES {
                        attempts += 1;
                        let retry_after = resp
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| v.parse::<u64>().ok())
                            .unwrap_or(1);
                        if retry_after <= 120 {
                            sleep(Duration::from_secs(retry_after)).await;
                            continue; // retry
                        }
                        warning!(
                            "Rate limited for {} seconds; not waiting that long.",
                            retry_after
                        );
                    }
                    match resp.error_for_status() {
                        Ok(valid_response) => valid_response,
                        Err(err) => {
                            if let Some(status) = err.status() {
                                if status.is_server_error() && attempts < MAX_RETRIES {
                                    attempts += 1;
                                    sleep(Duration::from_secs(2u64.pow(attempts))).await;
                                    continue; // retry
                                }
                            }
                            return Err(err); // propagate other errors
                        }
                    }
                }
                Err(err) => {
                    return Err(err);
                } // network or reqwest error
            };

            break response.json::<AlbumTracksResponse>().await?;
        };

        tracks.extend(page.items);
        next_url = page.next;
    }

    Ok(tracks)
}
