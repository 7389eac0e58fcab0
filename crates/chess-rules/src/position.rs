//! Chess position representation.

use chess_core::{CastleSide, Color, FenError, FenParser, Move, Piece, PieceKind, Square};

use crate::movegen;

/// The 64-square board, rank-major, `None` for empty squares.
pub type Board = [Option<Piece>; Square::COUNT];

/// Castling rights flags, one bit per [`CastleSide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    #[inline]
    const fn bit(side: CastleSide) -> u8 {
        1 << side as u8
    }

    /// Returns true if the given castle is still available.
    #[inline]
    pub const fn can_castle(self, side: CastleSide) -> bool {
        self.0 & Self::bit(side) != 0
    }

    /// Grants the given castling right.
    #[inline]
    pub fn grant(&mut self, side: CastleSide) {
        self.0 |= Self::bit(side);
    }

    /// Revokes the given castling right. Rights are never restored.
    #[inline]
    pub fn revoke(&mut self, side: CastleSide) {
        self.0 &= !Self::bit(side);
    }

    /// Returns true if no castling right remains.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Complete game state: board, side to move, castling rights,
/// en-passant target, move clocks, and cached king squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// The board squares.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square (if any).
    pub en_passant: Option<Square>,

    /// Halfmove clock for the 50-move rule.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,

    /// Cached king squares, indexed by color.
    kings: [Option<Square>; 2],
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Position {
            board: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [None; 2],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from a FEN string.
    ///
    /// Loading is all-or-nothing: a malformed FEN returns an error
    /// before any state is built. Castling rights claimed by the FEN
    /// are cleared when the corresponding king or rook is not on its
    /// home square.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let mut position = Position::empty();

        // Piece placement, rank 8 down to rank 1
        for (rank_idx, rank_str) in parsed.piece_placement.split('/').enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0u8;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    let square = Square::new(file, rank);
                    position.board[square.index()] = Some(piece);
                    if piece.is_kind(PieceKind::King) {
                        position.kings[piece.color().index()] = Some(square);
                    }
                    file += 1;
                }
            }
        }

        position.side_to_move = match parsed.active_color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => unreachable!("FEN parser validated this"),
        };

        for c in parsed.castling.chars() {
            match c {
                'K' => position.castling.grant(CastleSide::WhiteKingside),
                'Q' => position.castling.grant(CastleSide::WhiteQueenside),
                'k' => position.castling.grant(CastleSide::BlackKingside),
                'q' => position.castling.grant(CastleSide::BlackQueenside),
                _ => {}
            }
        }
        // FEN inputs are not required to be internally consistent
        position.refresh_castling_rights();

        position.en_passant = if parsed.en_passant == "-" {
            None
        } else {
            Square::from_algebraic(&parsed.en_passant)
        };

        position.halfmove_clock = parsed.halfmove_clock;
        position.fullmove_number = parsed.fullmove_number;

        Ok(position)
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Piece placement
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                let square = Square::new(file, rank);
                if let Some(piece) = self.board[square.index()] {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        // Active color
        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        // Castling, always in KQkq order
        fen.push(' ');
        if self.castling.is_empty() {
            fen.push('-');
        } else {
            for (side, c) in [
                (CastleSide::WhiteKingside, 'K'),
                (CastleSide::WhiteQueenside, 'Q'),
                (CastleSide::BlackKingside, 'k'),
                (CastleSide::BlackQueenside, 'q'),
            ] {
                if self.castling.can_castle(side) {
                    fen.push(c);
                }
            }
        }

        // En passant
        fen.push(' ');
        match self.en_passant {
            Some(square) => fen.push_str(&square.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// Returns the cached king square for the given color.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Flips the side to move. No other field changes.
    #[inline]
    pub fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Clears every castling right whose king or rook has left its
    /// home square. Rights are monotonically revocable, so this can
    /// run after any board change.
    pub fn refresh_castling_rights(&mut self) {
        for side in CastleSide::ALL {
            let color = side.color();
            let king_home = self.board[side.king_from().index()]
                == Some(Piece::new(PieceKind::King, color));
            let rook_home = self.board[side.rook_from().index()]
                == Some(Piece::new(PieceKind::Rook, color));
            if !(king_home && rook_home) {
                self.castling.revoke(side);
            }
        }
    }

    /// Applies a move for the side to move and advances all derived
    /// state: castling rights, en-passant target, move clocks, king
    /// cache, and the turn.
    ///
    /// The move must have been produced by this position's own move
    /// generation; structurally invalid moves are not detected.
    pub fn make_move(&mut self, mv: Move) {
        let side = self.side_to_move;
        let moved_pawn = mv
            .start()
            .and_then(|from| self.board[from.index()])
            .is_some_and(|piece| piece.is_kind(PieceKind::Pawn));
        let captured = match mv {
            Move::EnPassant { .. } => true,
            _ => mv.end().is_some_and(|to| self.board[to.index()].is_some()),
        };

        movegen::apply_move(&mut self.board, mv, side);

        // King cache
        match mv {
            Move::Castle(castle) => self.kings[side.index()] = Some(castle.king_to()),
            Move::Plain { from, to }
            | Move::EnPassant { from, to }
            | Move::Promotion { from, to, .. } => {
                if self.kings[side.index()] == Some(from) {
                    self.kings[side.index()] = Some(to);
                }
            }
        }

        // Any move that disturbs a home square revokes the right at once
        self.refresh_castling_rights();

        // A double pawn step exposes the square it passed over
        self.en_passant = match mv {
            Move::Plain { from, to } if moved_pawn && from.rank().abs_diff(to.rank()) == 2 => {
                Square::from_index((from.index() + to.index()) as u8 / 2)
            }
            _ => None,
        };

        if moved_pawn || captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if side == Color::Black {
            self.fullmove_number += 1;
        }
        self.switch_turn();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
