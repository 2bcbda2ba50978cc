// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.json";

// Command language
pub const COMMAND_PREFIX: char = 'p';
pub const DRAWING_SENTINEL: char = '-';
pub const EXAMPLE_ANNOTATION: &str = "-e5f6,g7f6";

// Speech
pub const SILENT_PAUSE: &str = "... wait ...";
pub const SPEAK_RATES: [f32; 6] = [0.2, 0.5, 0.7, 1.0, 1.1, 1.2];
pub const DEFAULT_SPEAK_RATE_INDEX: usize = 1;

// View toggles
pub const PARALLAX_ANGLES: [f32; 8] = [0.0, 20.0, 40.0, 50.0, 60.0, 65.0, 70.0, 80.0];
pub const PIECE_STYLES: [&str; 3] = ["default", "checker", "sized-checkers"];
pub const HOVER_MODES: [&str; 3] = ["off", "x-only", "x-and-y"];

// Hover oscillation
pub const HOVER_OSCILLATION_ANGLE: f32 = 1.5;
pub const HOVER_OSCILLATION_PERIOD_MS: f32 = 2000.0;
pub const HOVER_OSCILLATION_Y_ANGLE: f32 = 1.5;
pub const HOVER_OSCILLATION_Y_PERIOD_MS: f32 = 2500.0;
// Turning hover on with a flat board needs some tilt to oscillate around.
pub const HOVER_PARALLAX_FALLBACK_INDEX: usize = 3;

// Drawing geometry (fractions of board size live in core::annotate)
pub const ARROW_HEAD_SPREAD: f32 = std::f32::consts::PI / 6.0;
pub const ARROW_LINE_TRIM: f32 = 0.7;
pub const DRAWING_RGB: (u8, u8, u8) = (0xff, 0x6b, 0x6b);

// Host polling
pub const BOARD_POLL_MS: u64 = 250;
pub const INPUT_POLL_MS: u64 = 50;
