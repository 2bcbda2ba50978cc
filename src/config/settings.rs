// src/config/settings.rs
//
// The persisted settings snapshot. Every field is an index into one of
// the fixed cyclic lists in consts (plus one plain flag); toggle handlers
// advance an index and the whole snapshot is saved right after. Partial
// or missing snapshots on disk fall back per-field to the defaults.

use serde::{Deserialize, Serialize};

use super::consts::{
    DEFAULT_SPEAK_RATE_INDEX, HOVER_MODES, PARALLAX_ANGLES, PIECE_STYLES, SPEAK_RATES,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_speak_rate_index")]
    pub speak_rate_index: usize,
    #[serde(default)]
    pub parallax_index: usize,
    #[serde(default)]
    pub dividers_enabled: bool,
    #[serde(default)]
    pub piece_style_index: usize,
    #[serde(default)]
    pub hover_mode_index: usize,
}

fn default_speak_rate_index() -> usize {
    DEFAULT_SPEAK_RATE_INDEX
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speak_rate_index: DEFAULT_SPEAK_RATE_INDEX,
            parallax_index: 0,
            dividers_enabled: false,
            piece_style_index: 0,
            hover_mode_index: 0,
        }
    }
}

impl Settings {
    /// Clamp indices from an old or hand-edited snapshot back onto their
    /// lists. Out-of-range falls back to the default, not the last entry.
    pub fn sanitized(mut self) -> Self {
        if self.speak_rate_index >= SPEAK_RATES.len() {
            self.speak_rate_index = DEFAULT_SPEAK_RATE_INDEX;
        }
        if self.parallax_index >= PARALLAX_ANGLES.len() {
            self.parallax_index = 0;
        }
        if self.piece_style_index >= PIECE_STYLES.len() {
            self.piece_style_index = 0;
        }
        if self.hover_mode_index >= HOVER_MODES.len() {
            self.hover_mode_index = 0;
        }
        self
    }

    /* ---------- current values ---------- */

    pub fn speak_rate(&self) -> f32 {
        SPEAK_RATES[self.speak_rate_index]
    }

    pub fn speak_rate_is_max(&self) -> bool {
        self.speak_rate_index == SPEAK_RATES.len() - 1
    }

    pub fn parallax_angle(&self) -> f32 {
        PARALLAX_ANGLES[self.parallax_index]
    }

    pub fn parallax_active(&self) -> bool {
        self.parallax_index > 0
    }

    pub fn piece_style(&self) -> &'static str {
        PIECE_STYLES[self.piece_style_index]
    }

    pub fn hover_mode(&self) -> &'static str {
        HOVER_MODES[self.hover_mode_index]
    }

    pub fn hover_active(&self) -> bool {
        self.hover_mode_index > 0
    }

    /* ---------- cyclic advances ---------- */

    pub fn cycle_speak_rate(&mut self) {
        self.speak_rate_index = (self.speak_rate_index + 1) % SPEAK_RATES.len();
    }

    pub fn cycle_parallax(&mut self) {
        self.parallax_index = (self.parallax_index + 1) % PARALLAX_ANGLES.len();
    }

    pub fn toggle_dividers(&mut self) {
        self.dividers_enabled = !self.dividers_enabled;
    }

    pub fn cycle_piece_style(&mut self) {
        self.piece_style_index = (self.piece_style_index + 1) % PIECE_STYLES.len();
    }

    pub fn cycle_hover_mode(&mut self) {
        self.hover_mode_index = (self.hover_mode_index + 1) % HOVER_MODES.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_start() {
        let mut s = Settings::default();
        let original = s.clone();
        for _ in 0..PIECE_STYLES.len() {
            s.cycle_piece_style();
        }
        for _ in 0..PARALLAX_ANGLES.len() {
            s.cycle_parallax();
        }
        for _ in 0..SPEAK_RATES.len() {
            s.cycle_speak_rate();
        }
        s.toggle_dividers();
        s.toggle_dividers();
        for _ in 0..HOVER_MODES.len() {
            s.cycle_hover_mode();
        }
        assert_eq!(s, original);
    }

    #[test]
    fn sanitize_clamps_stale_indices() {
        let s = Settings {
            speak_rate_index: 99,
            parallax_index: 99,
            dividers_enabled: true,
            piece_style_index: 99,
            hover_mode_index: 99,
        }
        .sanitized();
        assert_eq!(s.speak_rate_index, DEFAULT_SPEAK_RATE_INDEX);
        assert_eq!(s.parallax_index, 0);
        assert!(s.dividers_enabled);
        assert_eq!(s.piece_style_index, 0);
        assert_eq!(s.hover_mode_index, 0);
    }

    #[test]
    fn partial_snapshot_fills_in_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "parallax_index": 2 }"#).unwrap();
        assert_eq!(s.parallax_index, 2);
        assert_eq!(s.speak_rate_index, DEFAULT_SPEAK_RATE_INDEX);
        assert!(!s.dividers_enabled);
    }
}
