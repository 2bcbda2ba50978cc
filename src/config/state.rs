// src/config/state.rs
use crate::core::board::Orientation;

use super::settings::Settings;

/// How the host board is currently presented. Not persisted; the host
/// tells us about orientation flips and resizes through the app hooks.
#[derive(Clone, Copy, Debug)]
pub struct BoardView {
    pub orientation: Orientation,
    /// Rendered board edge in pixels.
    pub width: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            orientation: Orientation::WhitePov,
            width: 480.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    pub view: BoardView,
}
