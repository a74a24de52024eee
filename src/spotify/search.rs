use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    spotify::MAX_RETRIES,
    types::{AlbumCandidate, SearchAlbumsResponse},
    warning,
};

/// Runs an album search and returns the candidates in the order the search
/// service ranked them.
///
/// `query` is passed through verbatim, so callers can use field qualifiers
/// (`album:... artist:...`) or plain free text. Only the first `limit`
/// results are requested; the resolver never paginates search results.
///
/// # Rate Limiting
///
/// 429 responses are retried after the `Retry-After` delay when it is at
/// most 120 seconds; 5xx responses back off exponentially. Both are bounded
/// by [`MAX_RETRIES`], after which the error is propagated.
pub async fn search_albums(
    query: &str,
    limit: u32,
    token: &str,
) -> Result<Vec<AlbumCandidate>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let limit_param = limit.to_string();
    let mut attempts: u32 = 0;

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[
                ("q", query),
                ("type", "album"),
                ("limit", limit_param.as_str()),
            ])
            .bearer_auth(token)
            .send()
            .await;

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

        let json = response.json::<SearchAlbumsResponse>().await?;
        return Ok(json.albums.items);
    }
}
