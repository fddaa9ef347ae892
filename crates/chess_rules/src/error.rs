//! Error types for the rules core
//!
//! Every variant is a caller contract violation or a malformed position. Normal
//! play never produces one: a move that reaches [`crate::api::apply`] has already
//! been matched against the generated legal-move set.

use thiserror::Error;

use crate::types::{Side, Square};

/// Errors that can occur in the rules core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinates outside the 8×8 grid
    #[error("Invalid square: ({row}, {col}) (must be 0-7)")]
    InvalidSquare { row: i32, col: i32 },

    /// Text that is not an algebraic square or coordinate move
    #[error("Cannot parse square or move from {input:?}")]
    ParseSquare { input: String },

    /// No piece at the source square
    #[error("No piece at square {square}")]
    EmptySquare { square: Square },

    /// Piece does not belong to the side that is moving
    #[error("Piece at {square} does not belong to {side}")]
    WrongSide { square: Square, side: Side },

    /// Move is not in the piece's current legal-move set
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A position must hold exactly one king per side
    #[error("{side} has {count} kings (expected exactly one)")]
    KingCount { side: Side, count: usize },

    /// More than one pawn marked as capturable en passant
    #[error("{count} pawns are marked en passant eligible (at most one allowed)")]
    EnPassantCount { count: usize },

    /// Serialized board without exactly 64 slots
    #[error("Board has {count} squares (expected 64)")]
    SquareCount { count: usize },

    /// Two pieces placed on the same square
    #[error("Square {square} is occupied twice")]
    DuplicateSquare { square: Square },

    /// Move proposed after checkmate or stalemate
    #[error("The game is already over")]
    GameOver,
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
