//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules
//! engine:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] and [`CastleSide`] for move representation
//! - FEN parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::{CastleSide, Move};
pub use piece::{Piece, PieceKind};
pub use square::Square;
