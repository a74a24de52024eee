use spillcli::types::Entry;
use spillcli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_rfc_vector() {
    // S256 example pair from RFC 7636 appendix B
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_generate_state_token() {
    let state = generate_state_token();

    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Unpredictability smoke check: two tokens should differ
    let state2 = generate_state_token();
    assert_ne!(state, state2);
}

#[test]
fn test_normalize_lowercases_and_strips_punctuation() {
    assert_eq!(normalize("OK Computer"), "ok computer");
    assert_eq!(normalize("R.E.M."), "rem");
    assert_eq!(normalize("Sgt. Pepper's Lonely Hearts Club Band"), normalize("sgt peppers lonely hearts club band"));
    assert_eq!(normalize("Sgt. Pepper's"), normalize("sgt peppers"));
}

#[test]
fn test_normalize_maps_ampersand() {
    assert_eq!(
        normalize("Mellon Collie & The Infinite Sadness"),
        "mellon collie and the infinite sadness"
    );

    // Already-written-out form lands on the same string
    assert_eq!(
        normalize("Mellon Collie and the Infinite Sadness"),
        normalize("Mellon Collie & The Infinite Sadness")
    );
}

#[test]
fn test_normalize_unicode_apostrophe() {
    // U+2019 and ASCII apostrophes both vanish, so the variants converge
    assert_eq!(normalize("I\u{2019}m Wide Awake, It\u{2019}s Morning"), "im wide awake its morning");
    assert_eq!(
        normalize("I\u{2019}m Wide Awake, It\u{2019}s Morning"),
        normalize("I'm Wide Awake, It's Morning")
    );
}

#[test]
fn test_normalize_keeps_digits_and_hyphens() {
    assert_eq!(normalize("4:44"), "444");
    assert_eq!(normalize("Half-Light II"), "half-light ii");
    assert_eq!(normalize("1989 (Taylor's Version)"), "1989 taylors version");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize("  In   Rainbows  "), "in rainbows");
    assert_eq!(normalize("In\tRainbows"), "in rainbows");
}

#[test]
fn test_normalize_idempotent() {
    for s in [
        "Sgt. Pepper's Lonely Hearts Club Band",
        "Mellon Collie & The Infinite Sadness",
        "  In   Rainbows  ",
        "Half-Light II",
        "",
    ] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_parse_entry_basic() {
    let entry = parse_entry("Radiohead - OK Computer").unwrap();
    assert_eq!(
        entry,
        Entry {
            artist: "Radiohead".to_string(),
            album: "OK Computer".to_string(),
        }
    );
}

#[test]
fn test_parse_entry_splits_on_first_separator_only() {
    // Later ` - ` stays in the album name
    let entry = parse_entry("Godspeed You! Black Emperor - Lift Your Skinny Fists - Like Antennas to Heaven").unwrap();
    assert_eq!(entry.artist, "Godspeed You! Black Emperor");
    assert_eq!(entry.album, "Lift Your Skinny Fists - Like Antennas to Heaven");

    // A hyphenated artist name without spaces around the hyphen is not a separator
    let entry = parse_entry("Jay-Z - The Blueprint").unwrap();
    assert_eq!(entry.artist, "Jay-Z");
    assert_eq!(entry.album, "The Blueprint");
}

#[test]
fn test_parse_entry_trims_whitespace() {
    let entry = parse_entry("  Portishead -  Dummy  ").unwrap();
    assert_eq!(entry.artist, "Portishead");
    assert_eq!(entry.album, "Dummy");
}

#[test]
fn test_parse_entry_rejects_blank_and_malformed_lines() {
    assert!(parse_entry("").is_none());
    assert!(parse_entry("   ").is_none());
    assert!(parse_entry("no separator here").is_none());
    assert!(parse_entry(" - Album Without Artist").is_none());
    assert!(parse_entry("Artist Without Album - ").is_none());
}
