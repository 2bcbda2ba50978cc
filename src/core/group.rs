// src/core/group.rs
//
// Sorting, colour/type grouping, and the statements built from groups.
// Speech and the list modal share this; speech gets silent pauses woven
// in, the modal gets plain lines.

use crate::config::consts::SILENT_PAUSE;

use super::board::{Colour, Orientation, Piece, PieceType};

/// Ascending by file, then by rank.
pub fn sort_pieces(pieces: &mut [Piece]) {
    pieces.sort_by(|a, b| (a.file(), a.rank()).cmp(&(b.file(), b.rank())));
}

/// One colour+type bucket, in sorted position order. Empty buckets are
/// never produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceGroup {
    pub colour: Colour,
    pub piece_type: PieceType,
    pub pieces: Vec<Piece>,
}

/// Partition into groups: white before black, piece types in
/// `PieceType::ALL` order, sorted order preserved inside each group.
pub fn group_by_colour_and_type(mut pieces: Vec<Piece>) -> Vec<PieceGroup> {
    sort_pieces(&mut pieces);

    let mut groups = Vec::new();
    for colour in Colour::ALL {
        for piece_type in PieceType::ALL {
            let bucket: Vec<Piece> = pieces
                .iter()
                .copied()
                .filter(|p| p.colour == colour && p.piece_type == piece_type)
                .collect();
            if !bucket.is_empty() {
                groups.push(PieceGroup { colour, piece_type, pieces: bucket });
            }
        }
    }
    groups
}

/// Undo grouping back into one sorted sequence.
pub fn flatten(groups: &[PieceGroup]) -> Vec<Piece> {
    let mut out: Vec<Piece> = groups.iter().flat_map(|g| g.pieces.iter().copied()).collect();
    sort_pieces(&mut out);
    out
}

/// `a2, b2` — the sorted squares of one group.
pub fn positions(group: &PieceGroup) -> String {
    let parts: Vec<String> = group.pieces.iter().map(|p| p.position()).collect();
    parts.join(", ")
}

/// One statement per group: a lone piece reads as a positional statement,
/// two or more collapse into a combined statement.
pub fn statement(group: &PieceGroup) -> String {
    if group.pieces.len() == 1 {
        let p = &group.pieces[0];
        format!("{} {} {}", p.position(), p.colour, p.piece_type)
    } else {
        format!(
            "{} {}s on {}",
            group.colour,
            group.piece_type,
            positions(group)
        )
    }
}

/// Spoken sequence for a set of groups. Pauses separate statements so the
/// listener can keep up; combined statements get a double pause.
pub fn spoken_messages(groups: &[PieceGroup]) -> Vec<String> {
    let mut msgs = Vec::new();
    for group in groups {
        msgs.push(statement(group));
        msgs.push(s!(SILENT_PAUSE));
        if group.pieces.len() > 1 {
            msgs.push(s!(SILENT_PAUSE));
        }
    }
    msgs
}

/// Full spoken report: viewer colour first, then the grouped statements.
pub fn full_report(pieces: Vec<Piece>, orientation: Orientation) -> Vec<String> {
    let mut msgs = vec![format!("You are {}", orientation.viewer())];
    msgs.extend(spoken_messages(&group_by_colour_and_type(pieces)));
    msgs
}

/// Text block for the list modal: a heading per colour, one line per
/// type, blank line between colours.
pub fn display_lines(groups: &[PieceGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for colour in Colour::ALL {
        let for_colour: Vec<&PieceGroup> =
            groups.iter().filter(|g| g.colour == colour).collect();
        if for_colour.is_empty() {
            continue;
        }
        lines.push(format!("{}:", colour.name().to_uppercase()));
        for group in for_colour {
            lines.push(format!("{}: {}", group.piece_type, positions(group)));
        }
        lines.push(s!());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(t: PieceType, c: Colour, file: u8, rank: u8) -> Piece {
        Piece::new(t, c, file, rank).unwrap()
    }

    #[test]
    fn sort_is_file_then_rank() {
        let mut pieces = vec![
            p(PieceType::Pawn, Colour::White, 2, 2),
            p(PieceType::Pawn, Colour::White, 1, 7),
            p(PieceType::Pawn, Colour::White, 1, 2),
        ];
        sort_pieces(&mut pieces);
        let order: Vec<String> = pieces.iter().map(|x| x.position()).collect();
        assert_eq!(order, ["a2", "a7", "b2"]);
    }

    #[test]
    fn grouping_then_flatten_then_grouping_is_stable() {
        let pieces = vec![
            p(PieceType::Knight, Colour::Black, 7, 8),
            p(PieceType::Pawn, Colour::White, 2, 2),
            p(PieceType::Pawn, Colour::White, 1, 2),
            p(PieceType::King, Colour::White, 5, 1),
        ];
        let once = group_by_colour_and_type(pieces);
        let again = group_by_colour_and_type(flatten(&once));
        assert_eq!(once, again);
    }

    #[test]
    fn lone_piece_reads_positionally() {
        let groups = group_by_colour_and_type(vec![p(PieceType::King, Colour::Black, 5, 8)]);
        assert_eq!(statement(&groups[0]), "e8 black king");
    }

    #[test]
    fn combined_statement_lists_positions_in_order() {
        let groups = group_by_colour_and_type(vec![
            p(PieceType::Pawn, Colour::White, 2, 2),
            p(PieceType::Pawn, Colour::White, 1, 2),
        ]);
        assert_eq!(statement(&groups[0]), "white pawns on a2, b2");
    }

    #[test]
    fn double_pause_after_combined_statements() {
        let groups = group_by_colour_and_type(vec![
            p(PieceType::Pawn, Colour::White, 1, 2),
            p(PieceType::Pawn, Colour::White, 2, 2),
            p(PieceType::King, Colour::White, 5, 1),
        ]);
        let msgs = spoken_messages(&groups);
        assert_eq!(
            msgs,
            [
                "white pawns on a2, b2",
                SILENT_PAUSE,
                SILENT_PAUSE,
                "e1 white king",
                SILENT_PAUSE,
            ]
        );
    }

    #[test]
    fn display_lines_group_by_colour() {
        let groups = group_by_colour_and_type(vec![
            p(PieceType::Pawn, Colour::White, 1, 2),
            p(PieceType::Rook, Colour::Black, 8, 8),
        ]);
        let lines = display_lines(&groups);
        assert_eq!(lines, ["WHITE:", "pawn: a2", "", "BLACK:", "rook: h8", ""]);
    }
}
