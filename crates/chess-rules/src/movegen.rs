//! Pseudolegal move generation, move application, and the legality
//! filter.
//!
//! A pseudolegal move obeys a piece's movement and capture geometry
//! but may leave the mover's own king exposed. [`legal_moves`] filters
//! pseudolegal candidates by applying each one to a scratch copy of
//! the board and checking whether any opponent reply could capture the
//! king (or, for castling, reach any square the king crosses).

use chess_core::{CastleSide, Color, Move, Piece, PieceKind, Square};
use thiserror::Error;

use crate::{Board, CastlingRights, Direction, EdgeDistanceTable, Position};

/// Errors raised when a per-piece generator is invoked on the wrong
/// occupant. This is a programming-contract violation, not a gameplay
/// condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("expected a {expected} on {square}")]
    InvalidPiece {
        expected: &'static str,
        square: Square,
    },
}

/// Generates pseudolegal moves for the sliding piece (bishop, rook, or
/// queen) on `from`.
pub fn sliding_moves(
    board: &Board,
    table: &EdgeDistanceTable,
    from: Square,
) -> Result<Vec<Move>, MoveGenError> {
    match board[from.index()] {
        Some(piece) if piece.is_sliding() => {
            let mut moves = Vec::new();
            slide(board, table, piece, from, &mut moves);
            Ok(moves)
        }
        _ => Err(MoveGenError::InvalidPiece {
            expected: "sliding piece",
            square: from,
        }),
    }
}

/// Generates pseudolegal moves for the pawn on `from`.
pub fn pawn_moves(
    board: &Board,
    table: &EdgeDistanceTable,
    from: Square,
    en_passant: Option<Square>,
) -> Result<Vec<Move>, MoveGenError> {
    match board[from.index()] {
        Some(piece) if piece.is_kind(PieceKind::Pawn) => {
            let mut moves = Vec::new();
            pawn(board, table, piece, from, en_passant, &mut moves);
            Ok(moves)
        }
        _ => Err(MoveGenError::InvalidPiece {
            expected: "pawn",
            square: from,
        }),
    }
}

/// Generates pseudolegal moves for the knight on `from`.
pub fn knight_moves(
    board: &Board,
    table: &EdgeDistanceTable,
    from: Square,
) -> Result<Vec<Move>, MoveGenError> {
    match board[from.index()] {
        Some(piece) if piece.is_kind(PieceKind::Knight) => {
            let mut moves = Vec::new();
            knight(board, table, piece, from, &mut moves);
            Ok(moves)
        }
        _ => Err(MoveGenError::InvalidPiece {
            expected: "knight",
            square: from,
        }),
    }
}

/// Generates pseudolegal one-step moves for the king on `from`.
/// Castling is generated separately by [`castle_moves`], and the
/// destination's safety is the legality filter's job.
pub fn king_moves(
    board: &Board,
    table: &EdgeDistanceTable,
    from: Square,
) -> Result<Vec<Move>, MoveGenError> {
    match board[from.index()] {
        Some(piece) if piece.is_kind(PieceKind::King) => {
            let mut moves = Vec::new();
            king(board, table, piece, from, &mut moves);
            Ok(moves)
        }
        _ => Err(MoveGenError::InvalidPiece {
            expected: "king",
            square: from,
        }),
    }
}

/// Generates pseudolegal castling moves for `side`: the right must
/// still be held and every square between king and rook empty.
/// Attack checks along the king's path are deferred to the legality
/// filter.
pub fn castle_moves(board: &Board, rights: CastlingRights, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for castle in CastleSide::ALL {
        if castle.color() == side
            && rights.can_castle(castle)
            && castle
                .between()
                .iter()
                .all(|square| board[square.index()].is_none())
        {
            moves.push(Move::Castle(castle));
        }
    }
    moves
}

/// Generates all pseudolegal moves for the side to move on the live
/// position.
pub fn pseudolegal_moves(position: &Position, table: &EdgeDistanceTable) -> Vec<Move> {
    pseudolegal_moves_on(
        &position.board,
        position.side_to_move,
        position.en_passant,
        position.castling,
        table,
    )
}

/// Generates all pseudolegal moves for `side` against an explicit
/// board snapshot, in ascending start-square order.
pub fn pseudolegal_moves_on(
    board: &Board,
    side: Color,
    en_passant: Option<Square>,
    rights: CastlingRights,
    table: &EdgeDistanceTable,
) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in Square::all() {
        let Some(piece) = board[from.index()] else {
            continue;
        };
        if piece.color() != side {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => pawn(board, table, piece, from, en_passant, &mut moves),
            PieceKind::Knight => knight(board, table, piece, from, &mut moves),
            PieceKind::King => king(board, table, piece, from, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                slide(board, table, piece, from, &mut moves)
            }
        }
    }

    moves.extend(castle_moves(board, rights, side));
    moves
}

/// Applies a move to a board in place for the given side.
///
/// The move is assumed to come from this generator's own pseudolegal
/// pass; referenced squares are not re-validated.
pub fn apply_move(board: &mut Board, mv: Move, side: Color) {
    match mv {
        Move::Plain { from, to } => {
            board[to.index()] = board[from.index()].take();
        }
        Move::EnPassant { from, to } => {
            board[to.index()] = board[from.index()].take();
            // The captured pawn sits one rank behind the destination
            let passed = (to.index() as i8 - 8 * side.pawn_direction()) as usize;
            board[passed] = None;
        }
        Move::Promotion { from, to, kind } => {
            board[from.index()] = None;
            board[to.index()] = Some(Piece::new(kind, side));
        }
        Move::Castle(castle) => {
            board[castle.king_to().index()] = board[castle.king_from().index()].take();
            board[castle.rook_to().index()] = board[castle.rook_from().index()].take();
        }
    }
}

/// Generates the legal moves for the side to move: pseudolegal moves
/// that leave the mover's king safe, with castling additionally
/// required to start from, pass through, and land on no attacked
/// square.
///
/// The live position is never mutated; every candidate is simulated on
/// a scratch copy of the board.
pub fn legal_moves(position: &Position, table: &EdgeDistanceTable) -> Vec<Move> {
    pseudolegal_moves(position, table)
        .into_iter()
        .filter(|&mv| is_legal(position, table, mv))
        .collect()
}

/// Returns true if the given color's king can currently be captured by
/// a pseudolegal opponent move.
pub fn is_in_check(position: &Position, table: &EdgeDistanceTable, color: Color) -> bool {
    let Some(king) = position.king_square(color) else {
        return false;
    };
    replies(&position.board, color.opposite(), table)
        .iter()
        .any(|reply| reply.end() == Some(king))
}

/// Simulates `mv` on a scratch board and checks the opponent's
/// pseudolegal replies against the mover's king (or the full king path
/// for castling).
fn is_legal(position: &Position, table: &EdgeDistanceTable, mv: Move) -> bool {
    let side = position.side_to_move;
    let mut board = position.board;
    apply_move(&mut board, mv, side);

    let opponent = replies(&board, side.opposite(), table);

    if let Move::Castle(castle) = mv {
        // Pawn checks are visible only while the king still occupies
        // its start square: a pawn's diagonal generates no reply to an
        // empty square, and the castle has already vacated it. Scan
        // the pre-move board for the start square, the post-move board
        // for the rest of the path.
        if is_in_check(position, table, side) {
            return false;
        }
        let path = castle.king_path();
        return !opponent
            .iter()
            .any(|reply| reply.end().is_some_and(|to| path.contains(&to)));
    }

    let king = match (mv.start(), position.king_square(side)) {
        (Some(from), Some(king)) if from == king => mv.end(),
        (_, king) => king,
    };
    match king {
        Some(king) => !opponent.iter().any(|reply| reply.end() == Some(king)),
        None => true,
    }
}

/// Opponent replies used for king-safety checks. Castling replies are
/// omitted since a castle can never capture, and the stale en-passant
/// target is irrelevant to king safety.
fn replies(board: &Board, side: Color, table: &EdgeDistanceTable) -> Vec<Move> {
    pseudolegal_moves_on(board, side, None, CastlingRights::NONE, table)
}

fn slide(
    board: &Board,
    table: &EdgeDistanceTable,
    piece: Piece,
    from: Square,
    moves: &mut Vec<Move>,
) {
    let directions: &[Direction] = match piece.kind() {
        PieceKind::Rook => &Direction::ORTHOGONAL,
        PieceKind::Bishop => &Direction::DIAGONAL,
        _ => &Direction::ALL,
    };

    for &direction in directions {
        for step in 1..=table.distance(from, direction) {
            let Some(to) = from.offset(direction.offset() * step as i8) else {
                break;
            };
            match board[to.index()] {
                None => moves.push(Move::plain(from, to)),
                Some(occupant) => {
                    if !Piece::same_color(occupant, piece) {
                        moves.push(Move::plain(from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn pawn(
    board: &Board,
    table: &EdgeDistanceTable,
    piece: Piece,
    from: Square,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let white = piece.is_white();
    let home = if white { 8..=15 } else { 48..=55 };
    // A pawn one step from the final rank promotes on any advance
    let promoting = if white {
        (48..=55).contains(&from.index())
    } else {
        (8..=15).contains(&from.index())
    };
    let forward = if white {
        Direction::North
    } else {
        Direction::South
    };

    // Forward steps onto empty squares only
    if table.distance(from, forward) >= 1 {
        if let Some(one) = from.offset(forward.offset()) {
            if board[one.index()].is_none() {
                push_pawn_move(moves, from, one, promoting);
                if home.contains(&from.index()) {
                    if let Some(two) = from.offset(forward.offset() * 2) {
                        if board[two.index()].is_none() {
                            moves.push(Move::plain(from, two));
                        }
                    }
                }
            }
        }
    }

    // Diagonal captures, gated by the edge table so the offset cannot
    // wrap around the a/h files
    let diagonals = if white {
        [Direction::NorthWest, Direction::NorthEast]
    } else {
        [Direction::SouthEast, Direction::SouthWest]
    };
    for diagonal in diagonals {
        if table.distance(from, diagonal) == 0 {
            continue;
        }
        let Some(to) = from.offset(diagonal.offset()) else {
            continue;
        };
        match board[to.index()] {
            Some(occupant) if !Piece::same_color(occupant, piece) => {
                push_pawn_move(moves, from, to, promoting);
            }
            _ => {}
        }
        // The captured pawn is beside the target square, so occupancy
        // of the target itself is not checked
        if en_passant == Some(to) {
            moves.push(Move::EnPassant { from, to });
        }
    }
}

fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, promoting: bool) {
    if promoting {
        for kind in PieceKind::PROMOTION_KINDS {
            moves.push(Move::Promotion { from, to, kind });
        }
    } else {
        moves.push(Move::plain(from, to));
    }
}

fn knight(
    board: &Board,
    table: &EdgeDistanceTable,
    piece: Piece,
    from: Square,
    moves: &mut Vec<Move>,
) {
    let north = table.distance(from, Direction::North);
    let south = table.distance(from, Direction::South);
    let east = table.distance(from, Direction::East);
    let west = table.distance(from, Direction::West);

    // Each jump crosses two ranks and one file or one rank and two
    // files; both axes must have room
    let jumps = [
        (15, north > 1 && west > 0),
        (17, north > 1 && east > 0),
        (10, east > 1 && north > 0),
        (-6, east > 1 && south > 0),
        (-17, south > 1 && west > 0),
        (-15, south > 1 && east > 0),
        (6, west > 1 && north > 0),
        (-10, west > 1 && south > 0),
    ];

    for (delta, on_board) in jumps {
        if !on_board {
            continue;
        }
        let Some(to) = from.offset(delta) else {
            continue;
        };
        match board[to.index()] {
            None => moves.push(Move::plain(from, to)),
            Some(occupant) if !Piece::same_color(occupant, piece) => {
                moves.push(Move::plain(from, to));
            }
            _ => {}
        }
    }
}

fn king(
    board: &Board,
    table: &EdgeDistanceTable,
    piece: Piece,
    from: Square,
    moves: &mut Vec<Move>,
) {
    for direction in Direction::ALL {
        if table.distance(from, direction) == 0 {
            continue;
        }
        let Some(to) = from.offset(direction.offset()) else {
            continue;
        };
        match board[to.index()] {
            None => moves.push(Move::plain(from, to)),
            Some(occupant) if !Piece::same_color(occupant, piece) => {
                moves.push(Move::plain(from, to));
            }
            _ => {}
        }
    }
}
