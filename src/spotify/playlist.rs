use reqwest::Client;

use crate::{
    config,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUser,
    },
};

/// The append endpoint accepts at most this many track URIs per request.
pub const ADD_TRACKS_LIMIT: usize = 100;

/// Fetches the profile of the user the token belongs to. The user id is
/// needed to address playlist creation.
pub async fn current_user(token: &str) -> Result<CurrentUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;

    response.error_for_status()?.json::<CurrentUser>().await
}

/// Creates an empty playlist owned by `user_id` and returns its id and
/// public URL.
///
/// Issued exactly once per run; a failure here is fatal to the run, so no
/// retry is attempted.
pub async fn create(
    user_id: &str,
    name: &str,
    public: bool,
    token: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: format!("Created by {} from an album list.", env!("CARGO_PKG_NAME")),
        public,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    response
        .error_for_status()?
        .json::<CreatePlaylistResponse>()
        .await
}

/// Appends up to [`ADD_TRACKS_LIMIT`] track URIs to the end of a playlist.
///
/// Callers partition longer sequences into consecutive chunks and submit
/// them strictly in order. Appending is not idempotent, so this request is
/// never retried.
pub async fn add_tracks(
    playlist_id: &str,
    uris: Vec<String>,
    token: &str,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let body = AddTracksRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    response
        .error_for_status()?
        .json::<AddTracksResponse>()
        .await
}
