use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Entry;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Anti-forgery token echoed back by the authorization server. Must be
/// unguessable; drawn from the same CSPRNG as the code verifier.
pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Canonicalizes a name for comparison: lowercases, maps `&` to `and`,
/// strips everything but ASCII letters, digits, whitespace, and hyphens,
/// then collapses whitespace runs.
///
/// Idempotent, so both sides of a comparison can be normalized freely.
/// Punctuation-insensitive: `normalize("Sgt. Pepper's")` equals
/// `normalize("sgt peppers")`.
pub fn normalize(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '&' {
            buf.push_str("and");
            continue;
        }
        for lc in c.to_lowercase() {
            if lc.is_ascii_lowercase() || lc.is_ascii_digit() || lc == '-' || lc.is_whitespace() {
                buf.push(lc);
            }
        }
    }
    buf.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits one list-file line into an [`Entry`] at the first ` - `; any later
/// ` - ` stays in the album name. Blank lines and lines missing a separator
/// or one of the two halves yield `None`.
pub fn parse_entry(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (artist, album) = line.split_once(" - ")?;
    let artist = artist.trim();
    let album = album.trim();
    if artist.is_empty() || album.is_empty() {
        return None;
    }

    Some(Entry {
        artist: artist.to_string(),
        album: album.to_string(),
    })
}
