use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::sync::{Mutex, Notify};

use crate::{
    config,
    server::start_api_server,
    types::{PkceSession, Token},
    utils, warning,
};

/// How long the flow waits for the user to finish the browser step before
/// giving up and releasing the callback port.
const AUTH_TIMEOUT: Duration = Duration::from_secs(300);

/// Runs the complete OAuth 2.0 PKCE authorization flow and returns the
/// obtained bearer token.
///
/// 1. Generates the PKCE code verifier, derives its SHA-256 challenge, and
///    generates the anti-forgery state token — all from a CSPRNG.
/// 2. Starts the single-use local callback receiver.
/// 3. Opens the authorization URL in the default browser (or prints it when
///    the browser cannot be launched).
/// 4. Waits for the callback handler to complete the attempt, bounded by
///    [`AUTH_TIMEOUT`].
/// 5. Tears the receiver down unconditionally — success, failure, or timeout.
///
/// The token is returned to the caller and kept in memory only; nothing is
/// persisted.
///
/// # Errors
///
/// Returns an error when the authorization URL cannot be built, when the
/// callback reports a failed attempt (denied authorization, state mismatch,
/// exchange failure), or when the wait times out.
pub async fn authorize() -> Result<Token, String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state_token = utils::generate_state_token();

    let shared_state: Arc<Mutex<Option<PkceSession>>> = Arc::new(Mutex::new(None));
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceSession {
            code_verifier: code_verifier.clone(),
            state: state_token.clone(),
            token: None,
            completed: false,
        });
    }

    // Start the single-use callback receiver.
    let shutdown = Arc::new(Notify::new());
    let server_state = Arc::clone(&shared_state);
    let server_shutdown = Arc::clone(&shutdown);
    let server = tokio::spawn(async move {
        start_api_server(server_state, server_shutdown).await;
    });

    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();
    let scope = config::spotify_scope();
    let auth_url = reqwest::Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", state_token.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge.as_str()),
        ],
    )
    .map_err(|e| format!("Failed to build authorization URL: {}", e))?;

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(Arc::clone(&shared_state)).await;

    // Tear the receiver down whether or not a valid callback arrived, so the
    // process never keeps the port bound.
    shutdown.notify_one();
    let _ = server.await;

    token.ok_or_else(|| "Authorization failed or timed out.".to_string())
}

/// Polls the shared attempt state until the callback handler marks it
/// completed, or until [`AUTH_TIMEOUT`] elapses.
///
/// Returns the token for a successful attempt, `None` for a failed or
/// timed-out one. A spinner keeps the user informed while they are off in
/// the browser.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceSession>>>) -> Option<Token> {
    use std::time::Instant;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in the browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let start = Instant::now();
    while start.elapsed() < AUTH_TIMEOUT {
        {
            let lock = shared_state.lock().await;
            if let Some(session) = lock.as_ref() {
                if session.completed {
                    pb.finish_and_clear();
                    return session.token.clone();
                }
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    pb.finish_and_clear();
    None
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Final step of the flow: posts the code, the original code verifier, and
/// the redirect URI to the token endpoint. The verifier proves that the
/// client completing the flow is the one that started it, so no client
/// secret is involved. One synchronous call, no retry — authorization codes
/// are single-use and short-lived.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, reqwest::Error> {
    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?;

    res.error_for_status()?.json::<Token>().await
}
