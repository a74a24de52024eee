use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::{Mutex, Notify};

use crate::{api, config, error, types::PkceSession};

/// Runs the single-use callback receiver until `shutdown` is notified.
///
/// The receiver exists only to catch the one OAuth redirect of the current
/// run; the authorization flow triggers `shutdown` as soon as its wait ends,
/// whether or not a valid callback arrived.
pub async fn start_api_server(state: Arc<Mutex<Option<PkceSession>>>, shutdown: Arc<Notify>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind callback receiver on {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.notified().await })
        .await
    {
        error!("Callback receiver failed: {}", e);
    }
}
