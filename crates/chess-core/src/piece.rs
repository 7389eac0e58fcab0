//! Chess piece representation.
//!
//! A [`Piece`] packs its type and color into a single byte: the type
//! occupies the low bits (king=1 through queen=6) and black pieces add
//! an offset of 8. The white/black boundary sits at 7, a value no valid
//! piece ever takes; [`Piece::is_white`] is the single place that
//! boundary is checked.

use crate::Color;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 1,
    Pawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
}

impl PieceKind {
    /// The four legal promotion targets, in the order promotion moves
    /// are enumerated.
    pub const PROMOTION_KINDS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Creates a piece kind from its numeric value.
    #[inline]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Pawn),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::Queen),
            _ => None,
        }
    }

    /// Returns the lowercase FEN character for this piece kind.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
        }
    }
}

/// A colored piece, stored as a single byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    const BLACK_OFFSET: u8 = 8;

    /// Creates a piece from its kind and color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        match color {
            Color::White => Piece(kind as u8),
            Color::Black => Piece(kind as u8 + Self::BLACK_OFFSET),
        }
    }

    /// Returns true if this piece is white.
    ///
    /// White values are 1-6 and black values are 9-14, so anything
    /// below 7 is white.
    #[inline]
    pub const fn is_white(self) -> bool {
        self.0 < 7
    }

    /// Returns the color of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        if self.is_white() {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns true if both pieces have the same color.
    #[inline]
    pub const fn same_color(a: Piece, b: Piece) -> bool {
        a.is_white() == b.is_white()
    }

    /// Returns the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        // Constructed values are 1-6 or 9-14, so the low bits are
        // always a valid kind.
        match PieceKind::from_value(self.0 % Self::BLACK_OFFSET) {
            Some(kind) => kind,
            None => unreachable!(),
        }
    }

    /// Returns true if this piece has the given kind.
    #[inline]
    pub const fn is_kind(self, kind: PieceKind) -> bool {
        self.0 % Self::BLACK_OFFSET == kind as u8
    }

    /// Returns true if this piece is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(
            self.kind(),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Returns the packed numeric value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the FEN character: uppercase for white, lowercase for black.
    pub const fn to_fen_char(self) -> char {
        let c = self.kind().to_char();
        if self.is_white() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.to_fen_char())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
