// src/core/board.rs
//
// Plain board vocabulary: piece types, colours, squares, orientation.
// Everything here is value-typed and recomputed per extraction; nothing
// is cached between calls.

use std::fmt;

pub const FILE_LETTERS: &str = "abcdefgh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    pub fn name(self) -> &'static str {
        match self {
            Colour::White => "white",
            Colour::Black => "black",
        }
    }

    pub fn from_name(s: &str) -> Option<Colour> {
        match s {
            "white" => Some(Colour::White),
            "black" => Some(Colour::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Speech/listing order: minor to major, king last.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }

    pub fn from_name(s: &str) -> Option<PieceType> {
        match s {
            "pawn" => Some(PieceType::Pawn),
            "knight" => Some(PieceType::Knight),
            "bishop" => Some(PieceType::Bishop),
            "rook" => Some(PieceType::Rook),
            "queen" => Some(PieceType::Queen),
            "king" => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side the viewing player is on. The host board is rendered from
/// the viewer's perspective, so extraction and annotation both mirror
/// their coordinates through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    WhitePov,
    BlackPov,
}

impl Orientation {
    pub fn is_white(self) -> bool {
        matches!(self, Orientation::WhitePov)
    }

    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::WhitePov => Orientation::BlackPov,
            Orientation::BlackPov => Orientation::WhitePov,
        }
    }

    pub fn viewer(self) -> Colour {
        match self {
            Orientation::WhitePov => Colour::White,
            Orientation::BlackPov => Colour::Black,
        }
    }
}

/// Absolute board square. File and rank are both 1..=8 regardless of
/// which way the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Square from file/rank characters. Anything outside `a-h`/`1-8`
    /// yields None.
    pub fn from_chars(file_ch: char, rank_ch: char) -> Option<Square> {
        if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
            return None;
        }
        Some(Square {
            file: (file_ch as u8 - b'a') + 1,
            rank: (rank_ch as u8 - b'0'),
        })
    }

    /// Parse a 2-character token like `e5`. A malformed token is dropped,
    /// never an error.
    pub fn parse(token: &str) -> Option<Square> {
        let mut chars = token.chars();
        let file_ch = chars.next()?;
        let rank_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Square::from_chars(file_ch, rank_ch)
    }

    pub fn file_letter(self) -> char {
        FILE_LETTERS.as_bytes()[(self.file - 1) as usize] as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}

/// One extracted piece. Derived from pixel coordinates once per
/// extraction call and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub colour: Colour,
    pub square: Square,
}

impl Piece {
    pub fn new(piece_type: PieceType, colour: Colour, file: u8, rank: u8) -> Option<Piece> {
        Some(Piece {
            piece_type,
            colour,
            square: Square::new(file, rank)?,
        })
    }

    pub fn file(&self) -> u8 {
        self.square.file
    }

    pub fn rank(&self) -> u8 {
        self.square.rank
    }

    /// Position in display form, e.g. `a2`.
    pub fn position(&self) -> String {
        self.square.to_string()
    }
}
