// src/core/commands.rs
//
// The command table and input classification.
//
// Commands are a static table of short names mapped to a tagged kind;
// dispatch is one match over the kind at the call site, so nothing here
// captures state. Every name is exposed under the fixed `p` prefix to
// keep commands out of the host page's own move-entry syntax, and prefix
// matching only ever considers the prefixed strings.

use crate::config::consts::{COMMAND_PREFIX, DRAWING_SENTINEL};
use crate::config::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    SpeakAll,
    SpeakWhiteKingside,
    SpeakWhiteQueenside,
    SpeakBlackKingside,
    SpeakBlackQueenside,
    SpeakWhiteHalf,
    SpeakBlackHalf,
    CycleSpeakRate,
    StopSpeaking,
    ListPieces,
    AnnotateExample,
    CycleParallax,
    ToggleDividers,
    CyclePieceStyle,
    CycleHoverMode,
}

pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
}

use CommandKind::*;

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { name: "a", kind: SpeakAll },
    CommandSpec { name: "wk", kind: SpeakWhiteKingside },
    CommandSpec { name: "wq", kind: SpeakWhiteQueenside },
    CommandSpec { name: "bk", kind: SpeakBlackKingside },
    CommandSpec { name: "bq", kind: SpeakBlackQueenside },
    CommandSpec { name: "ww", kind: SpeakWhiteHalf },
    CommandSpec { name: "bb", kind: SpeakBlackHalf },
    CommandSpec { name: "sr", kind: CycleSpeakRate },
    CommandSpec { name: "ss", kind: StopSpeaking },
    CommandSpec { name: "l", kind: ListPieces },
    CommandSpec { name: "-annotate", kind: AnnotateExample },
    CommandSpec { name: "px", kind: CycleParallax },
    CommandSpec { name: "div", kind: ToggleDividers },
    CommandSpec { name: "ps", kind: CyclePieceStyle },
    CommandSpec { name: "hv", kind: CycleHoverMode },
];

/// Namespaced form typed into the input field, e.g. `pa`, `psr`.
pub fn prefixed(name: &str) -> String {
    let mut s = String::with_capacity(name.len() + 1);
    s.push(COMMAND_PREFIX);
    s.push_str(name);
    s
}

pub fn match_exact(input: &str) -> Option<CommandKind> {
    COMMANDS
        .iter()
        .find(|spec| prefixed(spec.name) == input)
        .map(|spec| spec.kind)
}

/// True when the input could still become a command with more keystrokes.
pub fn is_prefix_of_any(input: &str) -> bool {
    COMMANDS
        .iter()
        .any(|spec| prefixed(spec.name).starts_with(input))
}

/// What the router does with the current field contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    /// Empty field: nothing to do.
    Idle,
    /// Starts with the drawing sentinel: always valid in progress,
    /// routed to the annotation renderer.
    Drawing,
    /// Exact hit: run the handler, clear the field and any overlay.
    Matched(CommandKind),
    /// Proper prefix of at least one command: no error styling.
    ValidPrefix,
    /// Matches nothing: visual cue only, never an error value.
    Invalid,
}

pub fn classify(input: &str) -> InputClass {
    if input.is_empty() {
        return InputClass::Idle;
    }
    if input.starts_with(DRAWING_SENTINEL) {
        return InputClass::Drawing;
    }
    if let Some(kind) = match_exact(input) {
        return InputClass::Matched(kind);
    }
    if is_prefix_of_any(input) {
        return InputClass::ValidPrefix;
    }
    InputClass::Invalid
}

/// Region predicate for the speak commands, over absolute (file, rank).
/// Kingside is files e-h; White's half is ranks 1-4.
pub fn region_filter(kind: CommandKind) -> Option<fn(u8, u8) -> bool> {
    match kind {
        SpeakAll => Some(|_, _| true),
        SpeakWhiteKingside => Some(|file, rank| file >= 5 && rank <= 4),
        SpeakWhiteQueenside => Some(|file, rank| file <= 4 && rank <= 4),
        SpeakBlackKingside => Some(|file, rank| file >= 5 && rank >= 5),
        SpeakBlackQueenside => Some(|file, rank| file <= 4 && rank >= 5),
        SpeakWhiteHalf => Some(|_, rank| rank <= 4),
        SpeakBlackHalf => Some(|_, rank| rank >= 5),
        _ => None,
    }
}

/// Display name with the live setting value where one applies.
pub fn label(kind: CommandKind, settings: &Settings) -> String {
    match kind {
        SpeakAll => s!("Speak all pieces"),
        SpeakWhiteKingside => s!("Speak w's k-side"),
        SpeakWhiteQueenside => s!("Speak w's q-side"),
        SpeakBlackKingside => s!("Speak b's k-side"),
        SpeakBlackQueenside => s!("Speak b's q-side"),
        SpeakWhiteHalf => s!("Speak w's pieces"),
        SpeakBlackHalf => s!("Speak b's pieces"),
        CycleSpeakRate => format!("Speak rate ({})", settings.speak_rate()),
        StopSpeaking => s!("Stop speaking"),
        ListPieces => s!("List pieces"),
        AnnotateExample => s!("Annotate board"),
        CycleParallax => format!("Parallax ({}°)", settings.parallax_angle()),
        ToggleDividers => format!(
            "Dividers ({})",
            if settings.dividers_enabled { "ON" } else { "OFF" }
        ),
        CyclePieceStyle => format!("Piece style ({})", settings.piece_style()),
        CycleHoverMode => format!("Hover mode ({})", settings.hover_mode()),
    }
}

/// Button caption: label plus the string to type, e.g.
/// `Speak rate (0.5) (psr)`.
pub fn button_label(spec: &CommandSpec, settings: &Settings) -> String {
    format!("{} ({})", label(spec.kind, settings), prefixed(spec.name))
}
