// src/gui/hover.rs
//
// Hover oscillation handle. The app holds at most one of these; starting
// while one is live is a no-op and toggling hover off drops it, so a
// dangling animation loop cannot survive a mode change.

use std::time::Instant;

use crate::config::consts::{
    HOVER_OSCILLATION_ANGLE, HOVER_OSCILLATION_PERIOD_MS, HOVER_OSCILLATION_Y_ANGLE,
    HOVER_OSCILLATION_Y_PERIOD_MS,
};
use crate::config::settings::Settings;

#[derive(Debug, Clone, Copy)]
pub struct HoverAnim {
    started: Instant,
}

impl HoverAnim {
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    /// Current (tilt, roll) in degrees on top of the parallax base angle.
    /// Roll stays 0 unless the mode is `x-and-y`.
    pub fn angles(&self, settings: &Settings, now: Instant) -> (f32, f32) {
        let elapsed_ms = now.duration_since(self.started).as_millis() as f32;

        let tilt = settings.parallax_angle()
            + (elapsed_ms / HOVER_OSCILLATION_PERIOD_MS).sin() * HOVER_OSCILLATION_ANGLE;

        let roll = if settings.hover_mode() == "x-and-y" {
            (elapsed_ms / HOVER_OSCILLATION_Y_PERIOD_MS).sin() * HOVER_OSCILLATION_Y_ANGLE
        } else {
            0.0
        };

        (tilt, roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn tilt_oscillates_around_parallax_base() {
        let mut settings = Settings::default();
        settings.parallax_index = 3; // 50°
        settings.hover_mode_index = 1;

        let anim = HoverAnim::start();
        let now = anim.started + Duration::from_millis(777);
        let (tilt, roll) = anim.angles(&settings, now);

        assert!((tilt - 50.0).abs() <= HOVER_OSCILLATION_ANGLE);
        assert_eq!(roll, 0.0);
    }

    #[test]
    fn roll_only_in_two_axis_mode() {
        let mut settings = Settings::default();
        settings.parallax_index = 3;
        settings.hover_mode_index = 2;

        let anim = HoverAnim::start();
        let now = anim.started + Duration::from_millis(1234);
        let (_, roll) = anim.angles(&settings, now);
        assert!(roll.abs() <= HOVER_OSCILLATION_Y_ANGLE);
        assert_ne!(roll, 0.0);
    }
}
