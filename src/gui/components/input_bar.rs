// src/gui/components/input_bar.rs
//
// The shared text field commands and drawings are typed into, plus the
// speaking/status readout underneath it.

use eframe::egui::{self, Color32, TextEdit};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Input:");

        let mut edit = TextEdit::singleline(&mut app.input_text)
            .font(egui::TextStyle::Monospace)
            .hint_text("pa, pwk, -e5f6,g7f6 ...")
            .desired_width(220.0);
        if app.input_invalid {
            edit = edit.text_color(Color32::from_rgb(0xd0, 0x30, 0x30));
        }

        if ui.add(edit).changed() {
            app.input_changed();
        }
    });

    match app.speech.current_text() {
        Some(text) => {
            ui.label(format!("Speaking: {text}"));
        }
        None if app.speech.is_speaking() => {
            // Between utterances or in a silent pause.
            ui.label("Speaking: ...");
        }
        None => {
            ui.label(&app.status);
        }
    }
}
