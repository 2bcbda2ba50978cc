// src/core/host.rs
//
// Host board snapshot: the tool reads someone else's rendering of the
// board, not a game model. A snapshot is the board's pixel width plus one
// element per piece, each carrying a class string ("white rook") and a
// CSS-style transform ("translate(19.5px, 136.5px)"). The host side is
// free to hand us stale or half-built snapshots; an unready snapshot just
// extracts to nothing and the caller polls again.

use super::board::{Orientation, Piece};

#[derive(Debug, Clone, PartialEq)]
pub struct HostPiece {
    pub class: String,
    pub transform: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostBoard {
    /// Rendered pixel width (boards are square).
    pub width: f32,
    pub pieces: Vec<HostPiece>,
}

impl HostBoard {
    pub fn square_size(&self) -> f32 {
        self.width / 8.0
    }

    /// A board with no width or no pieces hasn't finished rendering yet.
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && !self.pieces.is_empty()
    }

    /// Synthesize a snapshot from logical pieces, placing each element at
    /// the pixel offset the host renderer would use for this orientation.
    /// Inverse of extraction.
    pub fn from_pieces(pieces: &[Piece], orientation: Orientation, width: f32) -> HostBoard {
        let square = width / 8.0;
        let elements = pieces
            .iter()
            .map(|p| {
                let col = p.file() - 1;
                let row = p.rank() - 1;
                // Mirror back into screen coordinates: white POV draws
                // rank 8 at the top, black POV draws file h on the left.
                let (x_idx, y_idx) = if orientation.is_white() {
                    (col, 7 - row)
                } else {
                    (7 - col, row)
                };
                HostPiece {
                    class: join!(p.colour.name(), " ", p.piece_type.name()),
                    transform: format!(
                        "translate({}px, {}px)",
                        x_idx as f32 * square,
                        y_idx as f32 * square
                    ),
                }
            })
            .collect();

        HostBoard { width, pieces: elements }
    }
}

/// Pull (x, y) out of a `translate(Xpx, Ypx)` transform string.
/// A missing Y reads as 0 (single-axis translate). Anything that doesn't
/// look like a translate yields None.
pub fn parse_translate(transform: &str) -> Option<(f32, f32)> {
    let open = transform.find("translate(")? + "translate(".len();
    let close = transform[open..].find(')')? + open;
    let inner = &transform[open..close];

    let mut parts = inner.split(',');
    let x = parse_px(parts.next()?)?;
    let y = match parts.next() {
        Some(s) => parse_px(s)?,
        None => 0.0,
    };
    Some((x, y))
}

fn parse_px(s: &str) -> Option<f32> {
    let s = s.trim();
    let s = s.strip_suffix("px").unwrap_or(s);
    s.trim().parse::<f32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_two_axis() {
        assert_eq!(
            parse_translate("translate(136.5px, 97.5px)"),
            Some((136.5, 97.5))
        );
    }

    #[test]
    fn translate_single_axis_defaults_y() {
        assert_eq!(parse_translate("translate(39px)"), Some((39.0, 0.0)));
    }

    #[test]
    fn translate_garbage_is_none() {
        assert_eq!(parse_translate(""), None);
        assert_eq!(parse_translate("rotate(45deg)"), None);
        assert_eq!(parse_translate("translate(abcpx, 1px)"), None);
    }

    #[test]
    fn empty_board_is_not_ready() {
        assert!(!HostBoard::default().is_ready());
        let no_pieces = HostBoard { width: 156.0, pieces: Vec::new() };
        assert!(!no_pieces.is_ready());
    }
}
