// src/core/demo.rs
//
// Built-in position for running without a live host page: a middlegame
// puzzle with enough variety to exercise every speak region. The GUI and
// CLI synthesize host snapshots from it at whatever size/orientation the
// view currently has.

use super::board::{Colour, Orientation, Piece, PieceType};
use super::host::HostBoard;

use Colour::*;
use PieceType::*;

pub fn sample_position() -> Vec<Piece> {
    let spec: &[(PieceType, Colour, u8, u8)] = &[
        (Rook, White, 2, 1),
        (Bishop, Black, 3, 1),
        (Rook, Black, 8, 1),
        (King, Black, 4, 2),
        (Queen, White, 2, 3),
        (Pawn, Black, 3, 3),
        (Pawn, Black, 8, 3),
        (Pawn, Black, 4, 4),
        (Pawn, Black, 6, 4),
        (Bishop, Black, 7, 4),
        (Pawn, White, 4, 5),
        (Pawn, Black, 5, 5),
        (Rook, White, 2, 6),
        (King, White, 3, 6),
        (Pawn, White, 2, 7),
        (Pawn, White, 3, 7),
        (Bishop, White, 5, 7),
        (Pawn, White, 6, 7),
        (Knight, White, 2, 8),
        (Queen, Black, 8, 8),
    ];

    spec.iter()
        .filter_map(|&(t, c, file, rank)| Piece::new(t, c, file, rank))
        .collect()
}

pub fn sample_host_board(orientation: Orientation, width: f32) -> HostBoard {
    HostBoard::from_pieces(&sample_position(), orientation, width)
}
