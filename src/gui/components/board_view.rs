// src/gui/components/board_view.rs
//
// Paints the host board plus everything layered on it: dividers,
// annotation overlays, and the parallax/hover projection. All geometry
// comes from core::annotate in board pixels; this file only projects it
// onto the widget rect.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Vec2};

use crate::{
    config::consts::DRAWING_RGB,
    core::{
        annotate::{build_overlays, divider_lines, square_center, Overlay},
        board::Colour,
        extract::extract_pieces,
    },
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, now: Instant) {
    // --- Host controls (the hooks a real host page would call) ---
    let mut flip = false;
    let mut resized: Option<f32> = None;

    ui.horizontal(|ui| {
        if ui.button("Flip board").clicked() {
            flip = true;
        }
        let mut width = app.state.view.width;
        ui.label("Board size:");
        if ui
            .add(egui::Slider::new(&mut width, 240.0..=720.0).suffix("px"))
            .changed()
        {
            resized = Some(width);
        }
        ui.label(format!(
            "Viewing as {}",
            app.state.view.orientation.viewer()
        ));
    });

    if flip {
        app.flip_orientation();
    }
    if let Some(width) = resized {
        app.on_viewport_resized(width);
    }

    // --- Projection ---
    let size = app.state.view.width;
    let orientation = app.state.view.orientation;
    let settings = &app.state.settings;

    let (tilt, roll) = match &app.hover {
        Some(anim) if settings.parallax_active() => anim.angles(settings, now),
        _ => (settings.parallax_angle(), 0.0),
    };

    // Flat stand-in for a 3D perspective tilt: overall scale
    // cos(tilt)^0.5, vertical squash cos(tilt), roll about the centre.
    let tilt_cos = tilt.to_radians().cos().max(0.05);
    let scale = tilt_cos.sqrt();
    let squash = tilt_cos;
    let (roll_sin, roll_cos) = roll.to_radians().sin_cos();

    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
    let rect = response.rect;
    let center = rect.center();

    let project = move |p: (f32, f32)| -> Pos2 {
        let dx = (rect.min.x + p.0 - center.x) * scale;
        let dy = (rect.min.y + p.1 - center.y) * scale * squash;
        Pos2::new(
            center.x + dx * roll_cos - dy * roll_sin,
            center.y + dx * roll_sin + dy * roll_cos,
        )
    };

    let cell = size / 8.0;

    // --- Squares ---
    let light = Color32::from_rgb(0xf0, 0xd9, 0xb5);
    let dark = Color32::from_rgb(0xb5, 0x88, 0x63);
    for sx in 0..8 {
        for sy in 0..8 {
            let x = sx as f32 * cell;
            let y = sy as f32 * cell;
            let corners = vec![
                project((x, y)),
                project((x + cell, y)),
                project((x + cell, y + cell)),
                project((x, y + cell)),
            ];
            let fill = if (sx + sy) % 2 == 0 { light } else { dark };
            painter.add(Shape::convex_polygon(corners, fill, Stroke::NONE));
        }
    }

    // --- Pieces ---
    let pieces = extract_pieces(&app.host, orientation);
    for piece in &pieces {
        let pos = project(square_center(piece.square, size, orientation));
        let (fill, outline, ink) = match piece.colour {
            Colour::White => (
                Color32::from_gray(0xe8),
                Color32::from_gray(0x99),
                Color32::BLACK,
            ),
            Colour::Black => (
                Color32::from_gray(0x1a),
                Color32::from_gray(0x55),
                Color32::WHITE,
            ),
        };

        let radius = cell * scale * piece_radius_frac(settings.piece_style(), piece);
        painter.circle(pos, radius, fill, Stroke::new(1.5, outline));

        if settings.piece_style() == "default" {
            let letter = match piece.piece_type {
                crate::core::board::PieceType::Pawn => "P",
                crate::core::board::PieceType::Knight => "N",
                crate::core::board::PieceType::Bishop => "B",
                crate::core::board::PieceType::Rook => "R",
                crate::core::board::PieceType::Queen => "Q",
                crate::core::board::PieceType::King => "K",
            };
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                letter,
                FontId::proportional(cell * scale * 0.45),
                ink,
            );
        }
    }

    // --- Dividers ---
    if settings.dividers_enabled {
        for line in divider_lines(size) {
            painter.line_segment(
                [project(line[0]), project(line[1])],
                Stroke::new(4.5 * scale, Color32::BLACK),
            );
        }
    }

    // --- Annotation overlays ---
    let (r, g, b) = DRAWING_RGB;
    let draw_color = Color32::from_rgba_unmultiplied(r, g, b, 204); // 0.8 opacity
    for overlay in build_overlays(&app.drawing, size, orientation) {
        match overlay {
            Overlay::Circle { center: c, radius } => {
                painter.circle_stroke(project(c), radius * scale, Stroke::new(3.0, draw_color));
            }
            Overlay::Arrow { tail, line_end, head } => {
                painter.line_segment(
                    [project(tail), project(line_end)],
                    Stroke::new(4.0, draw_color),
                );
                let points = head.iter().map(|&p| project(p)).collect();
                painter.add(Shape::convex_polygon(points, draw_color, Stroke::NONE));
            }
        }
    }
}

/// Disc radius per style, as a fraction of a square. The default style
/// uses one comfortable size and puts the piece letter on top; the
/// checker styles size discs at 56% of a square, or 40-80% by rank for
/// sized-checkers.
fn piece_radius_frac(style: &str, piece: &crate::core::board::Piece) -> f32 {
    use crate::core::board::PieceType::*;
    match style {
        "checker" => 0.28,
        "sized-checkers" => match piece.piece_type {
            Pawn => 0.20,
            Queen | King => 0.40,
            _ => 0.2925,
        },
        _ => 0.38,
    }
}
