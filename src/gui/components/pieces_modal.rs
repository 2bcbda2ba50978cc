// src/gui/components/pieces_modal.rs
//
// The "list pieces" window: one table row per colour+type group with the
// sorted squares alongside. Closing drops the captured groups; the next
// open re-extracts from the host board.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::core::group;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(groups) = &app.pieces_modal else { return };

    let mut open = true;
    egui::Window::new("Pieces on the board")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(110.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Piece");
                    });
                    header.col(|ui| {
                        ui.strong("Squares");
                    });
                })
                .body(|mut body| {
                    for g in groups {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(format!("{} {}", g.colour, g.piece_type));
                            });
                            row.col(|ui| {
                                ui.label(group::positions(g));
                            });
                        });
                    }
                });
        });

    if !open {
        app.pieces_modal = None;
    }
}
