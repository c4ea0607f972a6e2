use std::fs;

use galaga_shooter::entities::Difficulty;
use galaga_shooter::error::SettingsError;
use galaga_shooter::settings::Settings;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.vibration_enabled);
    assert_eq!(settings.difficulty, Difficulty::Normal);
}

#[test]
fn save_then_load_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.toggle_vibration();
    settings.record_score(12_345);
    settings.difficulty = Difficulty::Hard;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert!(!loaded.vibration_enabled);
}

#[test]
fn difficulty_is_stored_lowercase() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        difficulty: Difficulty::Easy,
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"easy\""));
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "high_score": 900 }"#).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.high_score, 900);
    assert!(loaded.vibration_enabled);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();
    match Settings::load_from(&path) {
        Err(SettingsError::Parse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn record_score_only_keeps_improvements() {
    let mut settings = Settings::default();
    assert!(settings.record_score(500));
    assert!(!settings.record_score(400));
    assert!(!settings.record_score(500));
    assert_eq!(settings.high_score, 500);
}

#[test]
fn toggle_vibration_flips_and_reports() {
    let mut settings = Settings::default();
    assert!(!settings.toggle_vibration());
    assert!(settings.toggle_vibration());
}
