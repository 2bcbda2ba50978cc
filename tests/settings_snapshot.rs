// tests/settings_snapshot.rs
//
// Settings survive a restart via the JSON snapshot, and stale snapshots
// from older versions load without blowing up.
//
use std::fs;
use std::path::PathBuf;

use board_speaker::config::consts::{HOVER_PARALLAX_FALLBACK_INDEX, SPEAK_RATES};
use board_speaker::config::settings::Settings;
use board_speaker::store::{load_settings_from, save_settings_to};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("board_speaker_snap_{}_{}", std::process::id(), name))
}

#[test]
fn a_session_worth_of_toggles_survives_reload() {
    let path = temp_file("session.json");

    // "Session one": user speeds up speech, tilts the board, turns on
    // dividers and hover.
    let mut settings = Settings::default();
    settings.cycle_speak_rate();
    settings.cycle_parallax();
    settings.cycle_parallax();
    settings.toggle_dividers();
    settings.cycle_hover_mode();
    save_settings_to(&path, &settings).unwrap();

    // "Session two" starts from the snapshot.
    let restored = load_settings_from(&path).unwrap();
    assert_eq!(restored, settings);
    assert_eq!(restored.speak_rate(), 0.7);
    assert_eq!(restored.parallax_angle(), 40.0);
    assert!(restored.dividers_enabled);
    // hover_active is what decides whether the loop re-arms on startup.
    assert!(restored.hover_active());

    let _ = fs::remove_file(&path);
}

#[test]
fn hover_needs_a_tilt_to_mean_anything() {
    // The fallback index the hover toggle jumps to when parallax is flat
    // must itself be a real tilt.
    let mut settings = Settings::default();
    assert!(!settings.parallax_active());
    settings.parallax_index = HOVER_PARALLAX_FALLBACK_INDEX;
    assert!(settings.parallax_active());
}

#[test]
fn out_of_range_snapshot_loads_at_defaults() {
    let path = temp_file("stale.json");
    fs::write(
        &path,
        r#"{ "speak_rate_index": 42, "parallax_index": 42, "hover_mode_index": 42 }"#,
    )
    .unwrap();

    let restored = load_settings_from(&path).unwrap();
    assert_eq!(restored.speak_rate(), SPEAK_RATES[1]);
    assert!(!restored.parallax_active());
    assert!(!restored.hover_active());

    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_fields_from_a_newer_version_are_ignored() {
    let path = temp_file("newer.json");
    fs::write(
        &path,
        r#"{ "dividers_enabled": true, "voice_name": "en-GB", "theme": 2 }"#,
    )
    .unwrap();

    let restored = load_settings_from(&path).unwrap();
    assert!(restored.dividers_enabled);
    assert_eq!(restored.speak_rate_index, Settings::default().speak_rate_index);

    let _ = fs::remove_file(&path);
}
