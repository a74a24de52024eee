use serde_json::Value;
use spillcli::management::{MissReportManager, OverrideManager};
use spillcli::spotify::playlist::ADD_TRACKS_LIMIT;

#[test]
fn test_override_manager_lookup() {
    let overrides = OverrideManager::from_json(
        r#"{
            "Radiohead - OK Computer": "6dVIqQ8qmQ5GBnJ9shOYGE",
            "Jay-Z - The Blueprint": "spotify:album:4qnJ6EJYpeKMNzujrzN3mQ"
        }"#,
    )
    .unwrap();

    assert_eq!(overrides.len(), 2);
    assert!(!overrides.is_empty());

    // Bare id values come back as-is
    assert_eq!(
        overrides.lookup("Radiohead", "OK Computer").as_deref(),
        Some("6dVIqQ8qmQ5GBnJ9shOYGE")
    );

    // URI values are reduced to the id portion
    assert_eq!(
        overrides.lookup("Jay-Z", "The Blueprint").as_deref(),
        Some("4qnJ6EJYpeKMNzujrzN3mQ")
    );

    // The key is the verbatim "Artist - Album" pair, not a normalized form
    assert!(overrides.lookup("radiohead", "ok computer").is_none());
    assert!(overrides.lookup("Radiohead", "Kid A").is_none());
}

#[test]
fn test_override_manager_rejects_invalid_json() {
    assert!(OverrideManager::from_json("not json").is_err());
    assert!(OverrideManager::from_json(r#"["list","not","object"]"#).is_err());
}

#[test]
fn test_override_manager_default_is_empty() {
    let overrides = OverrideManager::default();
    assert!(overrides.is_empty());
    assert!(overrides.lookup("Anyone", "Anything").is_none());
}

#[test]
fn test_miss_report_shape() {
    let mut report = MissReportManager::new("Road Trip".to_string());
    report.add("B", "Y");

    assert_eq!(report.count(), 1);

    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    // Field names are part of the on-disk contract
    assert!(json["generatedAt"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(json["playlistName"], "Road Trip");
    assert_eq!(json["misses"].as_array().unwrap().len(), 1);
    assert_eq!(json["misses"][0]["artist"], "B");
    assert_eq!(json["misses"][0]["album"], "Y");
}

#[test]
fn test_miss_report_written_even_when_empty() {
    let report = MissReportManager::new("Road Trip".to_string());

    assert_eq!(report.count(), 0);
    assert!(report.misses().is_empty());

    // An empty run still serializes to a complete report
    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["playlistName"], "Road Trip");
    assert_eq!(json["misses"].as_array().unwrap().len(), 0);
}

#[test]
fn test_append_batch_partitioning() {
    // 250 tracks must go out as exactly 100, 100, 50 - in that order
    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:{i}")).collect();

    let batches: Vec<&[String]> = uris.chunks(ADD_TRACKS_LIMIT).collect();

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 100);
    assert_eq!(batches[1].len(), 100);
    assert_eq!(batches[2].len(), 50);

    // Concatenating the batches reconstructs the original sequence exactly
    let rejoined: Vec<String> = batches.concat();
    assert_eq!(rejoined, uris);

    // A short sequence fits into a single partial batch
    let few: Vec<String> = (0..3).map(|i| format!("spotify:track:{i}")).collect();
    assert_eq!(few.chunks(ADD_TRACKS_LIMIT).count(), 1);
}
