//! # Spotify Integration Module
//!
//! The integration layer between the playlist filler and the Spotify Web
//! API. Each submodule covers one domain of functionality:
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge/state generation,
//!   the bounded wait for the browser redirect, and the code-for-token
//!   exchange. No client secret is stored or transmitted.
//! - [`search`] - Album search used by the resolver, with a fixed result
//!   window per query.
//! - [`albums`] - Paginated album track listings, following the `next` URL
//!   chain to completion.
//! - [`playlist`] - Current-user lookup, playlist creation, and batched
//!   track appends.
//!
//! ## Request conventions
//!
//! All functions speak bearer-authenticated JSON through `reqwest` and
//! deserialize into the typed structs in [`crate::types`]. Idempotent GETs
//! (search, track pages) retry rate limits honoring `Retry-After` and back
//! off on server errors, bounded by [`MAX_RETRIES`]. Writes — playlist
//! creation and track appends — are issued exactly once: an append retried
//! after a lost response would duplicate tracks.

pub mod albums;
pub mod auth;
pub mod playlist;
pub mod search;

/// Upper bound on retry attempts for idempotent requests.
pub(crate) const MAX_RETRIES: u32 = 3;
