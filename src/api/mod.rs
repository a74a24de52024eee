//! # API Module
//!
//! HTTP endpoints served by the local callback receiver during the OAuth
//! 2.0 PKCE flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the single authorization redirect from Spotify's
//!   authorization server: validates the echoed anti-forgery state, exchanges
//!   the authorization code for an access token, and marks the attempt
//!   completed so the waiting flow can proceed.
//! - [`health`] - Returns service name, status, and version, useful for
//!   checking that the receiver actually came up on the configured port.
//!
//! Both handlers are plain async [Axum](https://docs.rs/axum) functions wired
//! into the router in [`crate::server`]. The callback is single-use by
//! design: whatever it receives, the attempt is completed and the receiver is
//! torn down by the flow driver afterwards.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
