//! Move representation.

use crate::{Color, PieceKind, Square};
use std::fmt;

/// Identifies which of the four castling moves is being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastleSide {
    WhiteKingside = 0,
    WhiteQueenside = 1,
    BlackKingside = 2,
    BlackQueenside = 3,
}

impl CastleSide {
    /// All castling sides, white before black, kingside before queenside.
    pub const ALL: [CastleSide; 4] = [
        CastleSide::WhiteKingside,
        CastleSide::WhiteQueenside,
        CastleSide::BlackKingside,
        CastleSide::BlackQueenside,
    ];

    /// Returns the castling side's color.
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            CastleSide::WhiteKingside | CastleSide::WhiteQueenside => Color::White,
            CastleSide::BlackKingside | CastleSide::BlackQueenside => Color::Black,
        }
    }

    /// The king's home square for this castling side.
    #[inline]
    pub const fn king_from(self) -> Square {
        match self.color() {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// The king's destination square.
    #[inline]
    pub const fn king_to(self) -> Square {
        match self {
            CastleSide::WhiteKingside => Square::G1,
            CastleSide::WhiteQueenside => Square::C1,
            CastleSide::BlackKingside => Square::G8,
            CastleSide::BlackQueenside => Square::C8,
        }
    }

    /// The rook's home square for this castling side.
    #[inline]
    pub const fn rook_from(self) -> Square {
        match self {
            CastleSide::WhiteKingside => Square::H1,
            CastleSide::WhiteQueenside => Square::A1,
            CastleSide::BlackKingside => Square::H8,
            CastleSide::BlackQueenside => Square::A8,
        }
    }

    /// The rook's destination square.
    #[inline]
    pub const fn rook_to(self) -> Square {
        match self {
            CastleSide::WhiteKingside => Square::F1,
            CastleSide::WhiteQueenside => Square::D1,
            CastleSide::BlackKingside => Square::F8,
            CastleSide::BlackQueenside => Square::D8,
        }
    }

    /// The squares the king occupies or crosses: start, intermediate,
    /// and destination. None of these may be attacked for the castle
    /// to be legal.
    #[inline]
    pub const fn king_path(self) -> [Square; 3] {
        match self {
            CastleSide::WhiteKingside => [Square::E1, Square::F1, Square::G1],
            CastleSide::WhiteQueenside => [Square::E1, Square::D1, Square::C1],
            CastleSide::BlackKingside => [Square::E8, Square::F8, Square::G8],
            CastleSide::BlackQueenside => [Square::E8, Square::D8, Square::C8],
        }
    }

    /// The squares strictly between king and rook, which must all be
    /// empty: two for kingside, three for queenside.
    #[inline]
    pub const fn between(self) -> &'static [Square] {
        match self {
            CastleSide::WhiteKingside => &[Square::F1, Square::G1],
            CastleSide::WhiteQueenside => &[Square::B1, Square::C1, Square::D1],
            CastleSide::BlackKingside => &[Square::F8, Square::G8],
            CastleSide::BlackQueenside => &[Square::B8, Square::C8, Square::D8],
        }
    }
}

/// A chess move.
///
/// Application logic matches exhaustively on the variant; each variant
/// carries exactly the payload its application needs. `Castle` carries
/// no squares of its own since both king and rook paths follow from
/// the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// An ordinary move or capture.
    Plain { from: Square, to: Square },
    /// An en-passant capture: the captured pawn is not on `to`.
    EnPassant { from: Square, to: Square },
    /// A castling move.
    Castle(CastleSide),
    /// A pawn promotion, possibly capturing.
    Promotion {
        from: Square,
        to: Square,
        kind: PieceKind,
    },
}

impl Move {
    /// Creates an ordinary move.
    #[inline]
    pub const fn plain(from: Square, to: Square) -> Self {
        Move::Plain { from, to }
    }

    /// Returns the starting square, if the variant carries one.
    #[inline]
    pub const fn start(self) -> Option<Square> {
        match self {
            Move::Plain { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => Some(from),
            Move::Castle(_) => None,
        }
    }

    /// Returns the ending square, if the variant carries one.
    #[inline]
    pub const fn end(self) -> Option<Square> {
        match self {
            Move::Plain { to, .. } | Move::EnPassant { to, .. } | Move::Promotion { to, .. } => {
                Some(to)
            }
            Move::Castle(_) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Plain { from, to } | Move::EnPassant { from, to } => {
                write!(f, "{}{}", from, to)
            }
            Move::Promotion { from, to, kind } => {
                write!(f, "{}{}{}", from, to, kind.to_char())
            }
            Move::Castle(side) => match side {
                CastleSide::WhiteKingside | CastleSide::BlackKingside => write!(f, "O-O"),
                CastleSide::WhiteQueenside | CastleSide::BlackQueenside => write!(f, "O-O-O"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_squares() {
        let m = Move::plain(Square::E1, Square::E8);
        assert_eq!(m.start(), Some(Square::E1));
        assert_eq!(m.end(), Some(Square::E8));

        let c = Move::Castle(CastleSide::WhiteKingside);
        assert_eq!(c.start(), None);
        assert_eq!(c.end(), None);
    }

    #[test]
    fn castle_geometry() {
        assert_eq!(CastleSide::WhiteKingside.king_from(), Square::E1);
        assert_eq!(CastleSide::WhiteKingside.king_to(), Square::G1);
        assert_eq!(CastleSide::WhiteKingside.rook_from(), Square::H1);
        assert_eq!(CastleSide::WhiteKingside.rook_to(), Square::F1);

        assert_eq!(CastleSide::BlackQueenside.king_from(), Square::E8);
        assert_eq!(CastleSide::BlackQueenside.king_to(), Square::C8);
        assert_eq!(CastleSide::BlackQueenside.rook_from(), Square::A8);
        assert_eq!(CastleSide::BlackQueenside.rook_to(), Square::D8);
    }

    #[test]
    fn castle_between_lengths() {
        assert_eq!(CastleSide::WhiteKingside.between().len(), 2);
        assert_eq!(CastleSide::WhiteQueenside.between().len(), 3);
        assert_eq!(CastleSide::BlackKingside.between().len(), 2);
        assert_eq!(CastleSide::BlackQueenside.between().len(), 3);
    }

    #[test]
    fn castle_colors() {
        assert_eq!(CastleSide::WhiteKingside.color(), Color::White);
        assert_eq!(CastleSide::WhiteQueenside.color(), Color::White);
        assert_eq!(CastleSide::BlackKingside.color(), Color::Black);
        assert_eq!(CastleSide::BlackQueenside.color(), Color::Black);
    }

    #[test]
    fn move_display() {
        let m = Move::plain(Square::new(4, 1), Square::new(4, 3));
        assert_eq!(format!("{}", m), "e2e4");

        let p = Move::Promotion {
            from: Square::new(4, 6),
            to: Square::E8,
            kind: PieceKind::Queen,
        };
        assert_eq!(format!("{}", p), "e7e8q");

        assert_eq!(format!("{}", Move::Castle(CastleSide::BlackKingside)), "O-O");
        assert_eq!(
            format!("{}", Move::Castle(CastleSide::WhiteQueenside)),
            "O-O-O"
        );
    }
}
