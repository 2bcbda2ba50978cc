// src/gui/components/command_panel.rs
//
// One button per command, captioned with the live setting value and the
// shortcut string. Clicks are collected first and dispatched after the
// layout pass, since execute() mutates app state the buttons read.

use eframe::egui;

use crate::core::commands::{self, CommandKind};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<CommandKind> = None;

    ui.heading("Commands");
    ui.add_space(4.0);

    for spec in commands::COMMANDS {
        let caption = commands::button_label(spec, &app.state.settings);
        if ui.button(caption).clicked() {
            clicked = Some(spec.kind);
        }
    }

    if let Some(kind) = clicked {
        logd!("UI: command button {:?}", kind);
        app.execute(kind);
    }
}
