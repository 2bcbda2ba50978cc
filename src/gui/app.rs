// src/gui/app.rs
use std::error::Error;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::{
    config::{
        consts::{BOARD_POLL_MS, EXAMPLE_ANNOTATION, INPUT_POLL_MS},
        state::AppState,
    },
    core::{
        annotate::{parse_drawing, DrawingCommand},
        board::Piece,
        commands::{classify, region_filter, CommandKind, InputClass},
        demo,
        extract::extract_pieces,
        group::{self, PieceGroup},
        host::HostBoard,
        speech::SpeechQueue,
    },
    store,
};

use super::{components, hover::HoverAnim};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Board Speaker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // demo position feeding the synthesized host snapshot
    pub position: Vec<Piece>,
    pub host: HostBoard,

    // shared input field UX
    pub input_text: String,
    pub input_invalid: bool,

    // active annotation (replaced wholesale on every input change)
    pub drawing: DrawingCommand,

    pub speech: SpeechQueue,

    // at most one live hover loop; None = cancelled
    pub hover: Option<HoverAnim>,

    // pieces-list modal contents while open
    pub pieces_modal: Option<Vec<PieceGroup>>,

    pub status: String,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        // Load-on-init; storage failure degrades to defaults.
        match store::load_settings() {
            Ok(settings) => {
                logf!("Init: settings loaded {:?}", settings);
                state.settings = settings;
            }
            Err(e) => {
                logd!("Init: no stored settings ({e}), using defaults");
                status = s!("Using default settings");
            }
        }

        let position = demo::sample_position();
        let host = HostBoard::from_pieces(&position, state.view.orientation, state.view.width);

        // Re-arm hover if it was persisted on.
        let hover = if state.settings.hover_active() {
            Some(HoverAnim::start())
        } else {
            None
        };

        logf!(
            "Init: pieces={}, orientation={:?}, board={}px",
            position.len(),
            state.view.orientation,
            state.view.width
        );

        Self {
            state,
            position,
            host,
            input_text: s!(),
            input_invalid: false,
            drawing: DrawingCommand::default(),
            speech: SpeechQueue::new(),
            hover,
            pieces_modal: None,
            status,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /* ---------- host hooks ---------- */

    /// The host re-rendered its board (move played, orientation flip).
    pub fn on_board_changed(&mut self) {
        self.host = HostBoard::from_pieces(
            &self.position,
            self.state.view.orientation,
            self.state.view.width,
        );
        logd!("Host: board changed, {} elements", self.host.pieces.len());
    }

    /// The host resized its board container.
    pub fn on_viewport_resized(&mut self, width: f32) {
        self.state.view.width = width;
        self.on_board_changed();
        logd!("Host: viewport resized to {width}px");
    }

    pub fn flip_orientation(&mut self) {
        self.state.view.orientation = self.state.view.orientation.flipped();
        logf!("UI: orientation → {:?}", self.state.view.orientation);
        self.on_board_changed();
    }

    /* ---------- input routing ---------- */

    /// Reclassify on every keystroke.
    pub fn input_changed(&mut self) {
        match classify(&self.input_text) {
            InputClass::Idle => {
                self.drawing = DrawingCommand::default();
                self.input_invalid = false;
            }
            InputClass::Drawing => {
                // Replace, never accumulate.
                self.drawing = parse_drawing(&self.input_text).unwrap_or_default();
                self.input_invalid = false;
            }
            InputClass::Matched(kind) => {
                logd!("UI: command triggered by '{}'", self.input_text);
                self.input_text.clear();
                self.drawing = DrawingCommand::default();
                self.input_invalid = false;
                self.execute(kind);
            }
            InputClass::ValidPrefix => {
                self.drawing = DrawingCommand::default();
                self.input_invalid = false;
            }
            InputClass::Invalid => {
                self.drawing = DrawingCommand::default();
                self.input_invalid = true;
            }
        }
    }

    /* ---------- command dispatch ---------- */

    pub fn execute(&mut self, kind: CommandKind) {
        use CommandKind::*;
        match kind {
            SpeakAll | SpeakWhiteKingside | SpeakWhiteQueenside | SpeakBlackKingside
            | SpeakBlackQueenside | SpeakWhiteHalf | SpeakBlackHalf => self.speak_region(kind),

            CycleSpeakRate => self.cycle_speak_rate(),
            StopSpeaking => {
                self.speech.cancel();
                self.status("Speech stopped");
            }
            ListPieces => self.open_pieces_modal(),
            AnnotateExample => {
                self.input_text = s!(EXAMPLE_ANNOTATION);
                self.input_changed();
            }
            CycleParallax => self.cycle_parallax(),
            ToggleDividers => {
                self.state.settings.toggle_dividers();
                self.persist_settings();
            }
            CyclePieceStyle => {
                self.state.settings.cycle_piece_style();
                self.persist_settings();
            }
            CycleHoverMode => self.cycle_hover_mode(),
        }
    }

    fn extract_current(&self) -> Vec<Piece> {
        extract_pieces(&self.host, self.state.view.orientation)
    }

    fn speak_region(&mut self, kind: CommandKind) {
        let Some(filter) = region_filter(kind) else { return };

        let pieces = self.extract_current();
        if pieces.is_empty() {
            // Not-ready contract: nothing to say yet, try again later.
            self.status("Board not ready");
            logd!("Speak: board not ready, skipping");
            return;
        }

        let selected: Vec<Piece> =
            pieces.into_iter().filter(|p| filter(p.file(), p.rank())).collect();
        let msgs = group::full_report(selected, self.state.view.orientation);
        logd!("Speak: {} messages queued", msgs.len());
        self.speech.speak_messages(msgs, self.state.settings.speak_rate());
    }

    fn cycle_speak_rate(&mut self) {
        self.speech.cancel();
        self.state.settings.cycle_speak_rate();
        self.persist_settings();

        let suffix = if self.state.settings.speak_rate_is_max() { " max" } else { "" };
        let announce = format!("Rate {}{}", self.state.settings.speak_rate(), suffix);
        let rate = self.state.settings.speak_rate();
        self.speech.speak_messages([announce], rate);
    }

    fn open_pieces_modal(&mut self) {
        let pieces = self.extract_current();
        if pieces.is_empty() {
            self.status("Board not ready");
            return;
        }
        self.pieces_modal = Some(group::group_by_colour_and_type(pieces));
    }

    fn cycle_parallax(&mut self) {
        self.state.settings.cycle_parallax();

        // Back at flat: the hover loop has nothing to tilt, force it off.
        if !self.state.settings.parallax_active() && self.state.settings.hover_active() {
            self.state.settings.hover_mode_index = 0;
            self.stop_hover();
        }
        self.persist_settings();
    }

    fn cycle_hover_mode(&mut self) {
        self.state.settings.cycle_hover_mode();

        if self.state.settings.hover_active() {
            if !self.state.settings.parallax_active() {
                self.state.settings.parallax_index =
                    crate::config::consts::HOVER_PARALLAX_FALLBACK_INDEX;
            }
            self.start_hover();
        } else {
            self.stop_hover();
        }
        self.persist_settings();
    }

    fn start_hover(&mut self) {
        // Already running: keep the existing handle, never stack a second.
        if self.hover.is_some() {
            return;
        }
        self.hover = Some(HoverAnim::start());
        logd!("Hover: loop started");
    }

    fn stop_hover(&mut self) {
        if self.hover.take().is_some() {
            logd!("Hover: loop cancelled");
        }
    }

    /// Save-on-mutate. Failure is logged and the app keeps running on the
    /// in-memory value.
    fn persist_settings(&mut self) {
        match store::save_settings(&self.state.settings) {
            Ok(()) => logd!("Settings: saved {:?}", self.state.settings),
            Err(e) => {
                loge!("Settings: save failed: {e}");
                self.status("Settings not saved (see log)");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.speech.tick(now);

        egui::SidePanel::right("commands")
            .resizable(false)
            .show(ctx, |ui| {
                components::command_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::board_view::draw(ui, self, now);
            ui.separator();
            components::input_bar::draw(ui, self);
        });

        components::pieces_modal::draw(ctx, self);

        // Hover and speech both advance on wall time; keep frames coming
        // while either is live. An unready host board gets the slower
        // retry cadence.
        if self.hover.is_some() {
            ctx.request_repaint();
        } else if self.speech.is_speaking() {
            ctx.request_repaint_after(Duration::from_millis(INPUT_POLL_MS));
        } else if !self.host.is_ready() {
            ctx.request_repaint_after(Duration::from_millis(BOARD_POLL_MS));
        }
    }
}
