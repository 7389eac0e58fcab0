//! Chess rules engine.
//!
//! This crate holds a board position, derives every move a side can
//! legally make, and applies moves to produce successor positions:
//! - [`Position`] - full game state with FEN encode/decode
//! - [`EdgeDistanceTable`] - precomputed distances to the board edge
//!   in eight ray directions
//! - [`movegen`] - pseudolegal generation per piece family, move
//!   application, and the legality filter
//!
//! # Architecture
//!
//! The board is a plain 64-square array; rays and jumps are bounded by
//! the edge-distance table instead of per-step bounds checks. Legality
//! is decided by simulation: each pseudolegal candidate is applied to
//! a scratch copy of the board and the opponent's pseudolegal replies
//! are checked against the mover's king.
//!
//! # Example
//!
//! ```
//! use chess_rules::{movegen, EdgeDistanceTable, Position};
//!
//! let table = EdgeDistanceTable::new();
//! let position = Position::startpos();
//! let moves = movegen::legal_moves(&position, &table);
//! assert_eq!(moves.len(), 20);
//! ```

mod edge;
pub mod movegen;
mod position;

pub use edge::{Direction, EdgeDistanceTable};
pub use movegen::MoveGenError;
pub use position::{Board, CastlingRights, Position};
