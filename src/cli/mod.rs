//! # CLI Module
//!
//! User-facing command implementations. There is exactly one substantial
//! command: [`fill`], which drives a whole run — authorization, playlist
//! creation, per-entry resolution and ingestion, and the miss report.
//!
//! ## Run shape
//!
//! ```text
//! list file ──parse──▶ entries
//! overrides ──load───▶ override table
//!                      │
//!            authorize (PKCE, local callback receiver)
//!                      │
//!            create playlist (GET /me, POST playlists)
//!                      │
//!            for each entry, in input order:
//!                resolve (override → strict search → loose search)
//!                ingest  (paginated track fetch → ≤100-URI appends)
//!                      │
//!            persist miss report, print summary
//! ```
//!
//! Entries are processed strictly one at a time; every entry ends the run
//! either having contributed tracks to the playlist or as exactly one record
//! in the miss report. Fatal errors (configuration, authorization, any
//! non-success resource response) terminate the run via the `error!` macro;
//! misses are data, not errors.

mod fill;

pub use fill::fill;
