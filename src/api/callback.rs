use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::PkceSession, warning};

/// Receives the one authorization redirect of the run.
///
/// Marks the pending attempt completed no matter what the query string
/// carries; only a callback with a code and a matching state token leads to
/// a code exchange.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceSession>>>>,
) -> Html<&'static str> {
    let mut lock = shared_state.lock().await;
    let Some(session) = lock.as_mut() else {
        return Html("<h4>No authorization attempt in progress.</h4>");
    };

    if session.completed {
        return Html("<h4>Authorization already completed.</h4>");
    }

    // Single-use: whatever this callback turns out to be, the attempt is over.
    session.completed = true;

    let Some(code) = params.get("code") else {
        return Html("<h4>Authorization was denied or no code was returned.</h4>");
    };

    // The echoed state must be the one generated at flow start.
    match params.get("state") {
        Some(echoed) if *echoed == session.state => {}
        _ => {
            warning!("Authorization callback carried a mismatched state value; rejecting it.");
            return Html("<h4>State mismatch. Authorization rejected.</h4>");
        }
    }

    let verifier = session.code_verifier.clone();
    match spotify::auth::exchange_code_pkce(code, &verifier).await {
        Ok(token) => {
            session.token = Some(token);
            Html("<h2>Authorization complete.</h2><p>You can close this window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Token exchange failed.</h4>")
        }
    }
}
