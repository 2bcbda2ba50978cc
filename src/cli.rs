// src/cli.rs
use std::env;

use crate::config::consts::{EXAMPLE_ANNOTATION, HOVER_PARALLAX_FALLBACK_INDEX};
use crate::config::settings::Settings;
use crate::core::{
    annotate::parse_drawing,
    board::{Orientation, Piece},
    commands::{self, classify, region_filter, CommandKind, InputClass},
    demo,
    extract::extract_pieces,
    group,
    speech::SpeechQueue,
};

pub struct Params {
    pub orientation: Orientation,
    pub width: f32,
    pub list_commands: bool,
    pub inputs: Vec<String>,
}

impl Params {
    fn new() -> Self {
        Self {
            orientation: Orientation::WhitePov,
            width: 480.0,
            list_commands: false,
            inputs: Vec::new(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    if params.list_commands {
        let settings = Settings::default();
        for spec in commands::COMMANDS {
            println!(
                "{:<12} {}",
                commands::prefixed(spec.name),
                commands::label(spec.kind, &settings)
            );
        }
        return Ok(());
    }

    if params.inputs.is_empty() {
        return Err("No input given (try --list-commands or --help)".into());
    }

    let mut session = Session::new(&params);
    for input in &params.inputs {
        session.feed(input)?;
    }
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--flip" => params.orientation = Orientation::BlackPov,
            "--size" => {
                let v: f32 = args.next().ok_or("Missing value for --size")?.parse()?;
                if !(100.0..=2000.0).contains(&v) {
                    return Err("Board size out of range (100..2000)".into());
                }
                params.width = v;
            }
            "--list-commands" => params.list_commands = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with("--") => return Err(format!("Unknown arg: {}", a).into()),
            _ => params.inputs.push(a),
        }
    }

    Ok(params)
}

/// One routing pass over the built-in position. Settings mutate in memory
/// only; the CLI never touches the stored snapshot.
struct Session {
    settings: Settings,
    orientation: Orientation,
    width: f32,
    speech: SpeechQueue,
}

impl Session {
    fn new(params: &Params) -> Self {
        Self {
            settings: Settings::default(),
            orientation: params.orientation,
            width: params.width,
            speech: SpeechQueue::new(),
        }
    }

    /// Route one input string exactly as the GUI field would.
    fn feed(&mut self, input: &str) -> Result<(), Box<dyn std::error::Error>> {
        match classify(input) {
            InputClass::Idle => Ok(()),
            InputClass::Drawing => {
                self.print_drawing(input);
                Ok(())
            }
            InputClass::Matched(kind) => {
                self.execute(kind);
                Ok(())
            }
            InputClass::ValidPrefix => {
                Err(format!("Incomplete command: {}", input).into())
            }
            InputClass::Invalid => Err(format!("Not a command: {}", input).into()),
        }
    }

    fn execute(&mut self, kind: CommandKind) {
        use CommandKind::*;
        match kind {
            SpeakAll | SpeakWhiteKingside | SpeakWhiteQueenside | SpeakBlackKingside
            | SpeakBlackQueenside | SpeakWhiteHalf | SpeakBlackHalf => self.speak_region(kind),

            CycleSpeakRate => {
                self.settings.cycle_speak_rate();
                let suffix = if self.settings.speak_rate_is_max() { " max" } else { "" };
                println!("Rate {}{}", self.settings.speak_rate(), suffix);
            }
            StopSpeaking => {
                self.speech.cancel();
                println!("Speech stopped");
            }
            ListPieces => {
                let groups = group::group_by_colour_and_type(self.extract_current());
                for line in group::display_lines(&groups) {
                    println!("{line}");
                }
            }
            AnnotateExample => self.print_drawing(EXAMPLE_ANNOTATION),
            CycleParallax => {
                self.settings.cycle_parallax();
                // Back at flat: nothing for hover to tilt, force it off.
                if !self.settings.parallax_active() && self.settings.hover_active() {
                    self.settings.hover_mode_index = 0;
                    println!("Hover mode {}", self.settings.hover_mode());
                }
                println!("Parallax {}°", self.settings.parallax_angle());
            }
            ToggleDividers => {
                self.settings.toggle_dividers();
                println!(
                    "Dividers {}",
                    if self.settings.dividers_enabled { "ON" } else { "OFF" }
                );
            }
            CyclePieceStyle => {
                self.settings.cycle_piece_style();
                println!("Piece style {}", self.settings.piece_style());
            }
            CycleHoverMode => {
                self.settings.cycle_hover_mode();
                if self.settings.hover_active() && !self.settings.parallax_active() {
                    self.settings.parallax_index = HOVER_PARALLAX_FALLBACK_INDEX;
                    println!("Parallax {}°", self.settings.parallax_angle());
                }
                println!("Hover mode {}", self.settings.hover_mode());
            }
        }
    }

    fn extract_current(&self) -> Vec<Piece> {
        let board = demo::sample_host_board(self.orientation, self.width);
        extract_pieces(&board, self.orientation)
    }

    fn speak_region(&mut self, kind: CommandKind) {
        let Some(filter) = region_filter(kind) else { return };

        let selected: Vec<Piece> = self
            .extract_current()
            .into_iter()
            .filter(|p| filter(p.file(), p.rank()))
            .collect();

        self.speech.speak_messages(
            group::full_report(selected, self.orientation),
            self.settings.speak_rate(),
        );

        // No pacing on stdout; pauses print as blank beats.
        for utt in self.speech.drain_all() {
            if utt.is_silent() {
                println!();
            } else {
                println!("{}", utt.text);
            }
        }
    }

    fn print_drawing(&self, input: &str) {
        let Some(cmd) = parse_drawing(input) else { return };
        for sq in &cmd.circles {
            println!("circle {}", sq);
        }
        for (from, to) in &cmd.arrows {
            println!("arrow {} -> {}", from, to);
        }
        if cmd.is_empty() {
            println!("(nothing to draw)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&Params::new())
    }

    #[test]
    fn hover_toggle_tilts_a_flat_board() {
        let mut s = session();
        s.feed("phv").unwrap();
        assert!(s.settings.hover_active());
        assert!(s.settings.parallax_active());
        assert_eq!(s.settings.parallax_index, HOVER_PARALLAX_FALLBACK_INDEX);
    }

    #[test]
    fn cycling_parallax_back_to_flat_stops_hover() {
        let mut s = session();
        s.feed("phv").unwrap();

        // Walk the tilt the rest of the way round to flat.
        while s.settings.parallax_active() {
            s.feed("ppx").unwrap();
        }
        assert!(!s.settings.hover_active());
    }

    #[test]
    fn bad_input_is_an_error_not_a_command() {
        let mut s = session();
        assert!(s.feed("pzz").is_err());
        assert!(s.feed("pw").is_err());
        assert!(s.feed("pa").is_ok());
    }
}
