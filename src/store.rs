// src/store.rs
//
// Settings persistence: one JSON snapshot under a fixed key in the local
// store directory. Storage trouble is never fatal here; callers log it
// and keep going on in-memory defaults.

use std::{fs, io, path::Path, path::PathBuf};

use crate::config::consts::{SETTINGS_FILE, STORE_DIR};
use crate::config::settings::Settings;

pub fn settings_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

pub fn load_settings() -> io::Result<Settings> {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn load_settings_from(path: &Path) -> io::Result<Settings> {
    let txt = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&txt)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(settings.sanitized())
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let txt = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, txt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("board_speaker_store_{}_{}", std::process::id(), name))
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_file("roundtrip.json");
        let mut settings = Settings::default();
        settings.cycle_parallax();
        settings.toggle_dividers();

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = temp_file("missing.json");
        assert!(load_settings_from(&path).is_err());
    }

    #[test]
    fn partial_snapshot_loads_with_defaults() {
        let path = temp_file("partial.json");
        fs::write(&path, r#"{ "dividers_enabled": true }"#).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert!(loaded.dividers_enabled);
        assert_eq!(loaded, Settings { dividers_enabled: true, ..Settings::default() });

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn garbage_snapshot_is_an_error_not_a_panic() {
        let path = temp_file("garbage.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(load_settings_from(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
