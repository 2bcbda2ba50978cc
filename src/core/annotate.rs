// src/core/annotate.rs
//
// Drawing mini-language and overlay geometry.
//
// Input is everything after the `-` sentinel, comma-separated. Token
// length decides the shape: 2 chars circle one square, 4 chars arrow
// between two squares, 3 chars circle the first two and ignore the
// third. Bad tokens are dropped and the rest of the string still draws.
//
// Geometry is computed in board pixels so the painter just scales shapes
// onto the widget rect. Re-rendering always starts from a clean slate;
// overlays never accumulate across calls.

use crate::config::consts::{
    ARROW_HEAD_SPREAD, ARROW_LINE_TRIM, DRAWING_SENTINEL,
};

use super::board::{Orientation, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawingCommand {
    pub circles: Vec<Square>,
    pub arrows: Vec<(Square, Square)>,
}

impl DrawingCommand {
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.arrows.is_empty()
    }
}

/// Parse a command string. Returns None unless the string carries the
/// drawing sentinel; a sentinel with nothing but junk after it still
/// parses, to an empty command.
pub fn parse_drawing(input: &str) -> Option<DrawingCommand> {
    let content = input.strip_prefix(DRAWING_SENTINEL)?;

    let mut cmd = DrawingCommand::default();
    for part in content.split(',') {
        // Classified by character count: free-typed input can carry
        // multi-byte characters, and those are just bad tokens.
        let chars: Vec<char> = part.chars().collect();
        match chars.len() {
            2 | 3 => {
                // Circle the first two characters; a third is ignored.
                if let Some(sq) = Square::from_chars(chars[0], chars[1]) {
                    cmd.circles.push(sq);
                }
            }
            4 => {
                let from = Square::from_chars(chars[0], chars[1]);
                let to = Square::from_chars(chars[2], chars[3]);
                if let (Some(from), Some(to)) = (from, to) {
                    cmd.arrows.push((from, to));
                }
            }
            _ => {} // ignore
        }
    }
    Some(cmd)
}

/// Centre of a square in board pixels, orientation flip applied the same
/// way as extraction: white POV mirrors the rank, black POV the file.
pub fn square_center(square: Square, board_size: f32, orientation: Orientation) -> (f32, f32) {
    let file_idx = (square.file - 1) as f32;
    let rank_idx = (square.rank - 1) as f32;

    let cell = board_size / 8.0;
    let half = board_size / 16.0;

    if orientation.is_white() {
        (file_idx * cell + half, (7.0 - rank_idx) * cell + half)
    } else {
        ((7.0 - file_idx) * cell + half, rank_idx * cell + half)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Circle {
        center: (f32, f32),
        radius: f32,
    },
    Arrow {
        /// Line start, and end pulled back to the base of the head.
        tail: (f32, f32),
        line_end: (f32, f32),
        /// Arrowhead triangle: tip first, then the two swept-back points.
        head: [(f32, f32); 3],
    },
}

fn circle_overlay(square: Square, board_size: f32, orientation: Orientation) -> Overlay {
    Overlay::Circle {
        center: square_center(square, board_size, orientation),
        radius: board_size / 16.0,
    }
}

fn arrow_overlay(
    from: Square,
    to: Square,
    board_size: f32,
    orientation: Orientation,
) -> Overlay {
    let (x1, y1) = square_center(from, board_size, orientation);
    let (x2, y2) = square_center(to, board_size, orientation);

    let angle = (y2 - y1).atan2(x2 - x1);
    let head_len = board_size / 20.0;

    let wing = |spread: f32| {
        (
            x2 - head_len * (angle + spread).cos(),
            y2 - head_len * (angle + spread).sin(),
        )
    };

    Overlay::Arrow {
        tail: (x1, y1),
        line_end: (
            x2 - head_len * ARROW_LINE_TRIM * angle.cos(),
            y2 - head_len * ARROW_LINE_TRIM * angle.sin(),
        ),
        head: [(x2, y2), wing(-ARROW_HEAD_SPREAD), wing(ARROW_HEAD_SPREAD)],
    }
}

/// Shape list for a parsed command. Circles first, then arrows, matching
/// the paint order.
pub fn build_overlays(
    cmd: &DrawingCommand,
    board_size: f32,
    orientation: Orientation,
) -> Vec<Overlay> {
    let mut shapes = Vec::with_capacity(cmd.circles.len() + cmd.arrows.len());
    for &sq in &cmd.circles {
        shapes.push(circle_overlay(sq, board_size, orientation));
    }
    for &(from, to) in &cmd.arrows {
        shapes.push(arrow_overlay(from, to, board_size, orientation));
    }
    shapes
}

/// Mid-board divider lines (horizontal + vertical), as point pairs.
pub fn divider_lines(board_size: f32) -> [[(f32, f32); 2]; 2] {
    let mid = board_size / 2.0;
    [
        [(0.0, mid), (board_size, mid)],
        [(mid, 0.0), (mid, board_size)],
    ]
}
