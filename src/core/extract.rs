// src/core/extract.rs
//
// Board state extraction: host pixel snapshot → logical pieces.
//
// The host renders every piece at a pixel offset inside the board; which
// square that offset means depends on who is looking at the board. White
// POV puts rank 8 at y = 0, black POV puts file h at x = 0. Correction
// normalizes both to absolute file/rank so everything downstream can
// ignore the flip.

use super::board::{Colour, Orientation, Piece, PieceType};
use super::host::{parse_translate, HostBoard};

/// Snapshot → pieces, in host element order.
///
/// An unready board (no width, no pieces) produces an empty vec: that is
/// the "board not ready" signal and callers are expected to retry later,
/// not to treat it as an error. Elements whose class or transform don't
/// match the piece vocabulary are skipped; the host parks incidental
/// nodes (ghosts, drag previews) in the same container.
pub fn extract_pieces(board: &HostBoard, orientation: Orientation) -> Vec<Piece> {
    if !board.is_ready() {
        return Vec::new();
    }

    let square = board.square_size();

    board
        .pieces
        .iter()
        .filter_map(|el| {
            let (x, y) = parse_translate(&el.transform)?;
            let (colour, piece_type) = parse_class(&el.class)?;

            let mut col = (x / square).floor() as i32;
            let mut row = (y / square).floor() as i32;

            if orientation.is_white() {
                row = 7 - row;
            } else {
                col = 7 - col;
            }

            if !(0..8).contains(&col) || !(0..8).contains(&row) {
                return None;
            }

            Piece::new(piece_type, colour, col as u8 + 1, row as u8 + 1)
        })
        .collect()
}

/// Class metadata must be exactly `<colour> <type>`; anything else is
/// dropped.
fn parse_class(class: &str) -> Option<(Colour, PieceType)> {
    let mut words = class.split_whitespace();
    let colour = Colour::from_name(words.next()?)?;
    let piece_type = PieceType::from_name(words.next()?)?;
    if words.next().is_some() {
        return None;
    }
    Some((colour, piece_type))
}
