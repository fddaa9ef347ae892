//! Move queries and execution
//!
//! The query-then-act protocol every caller follows:
//!
//! 1. [`legal_moves_for`] generates and stores the legal-move set of one piece
//! 2. [`is_member`] tests a proposal against that stored set
//! 3. [`apply`] executes it, after repeating the membership test itself
//!
//! Executing a move invalidates every stored set, so a proposal built from a stale
//! query is rejected rather than played.

use tracing::warn;

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::move_gen::generate;
use crate::types::*;

/// Read-only view of the piece on `square`
pub fn occupant(board: &Board, square: Square) -> Option<PieceView> {
    board.occupant(square)
}

/// Legal moves of the piece on `square`, empty if the square is empty
///
/// Turn order is not enforced here; query only the side to move (or use
/// [`crate::api::Game::legal_moves`]).
pub fn legal_moves_for(board: &mut Board, square: Square) -> MoveSet {
    if board.is_empty(square) {
        return MoveSet::new();
    }
    generate(board, square, true)
}

/// Every legal move of `side`, in board order
pub fn all_legal_moves(board: &mut Board, side: Side) -> MoveSet {
    let squares: Vec<Square> = board.pieces(side).map(|(square, _)| square).collect();
    squares
        .into_iter()
        .flat_map(|square| generate(board, square, true))
        .collect()
}

/// Is `mv` in the legal-move set currently stored for its origin square?
pub fn is_member(board: &Board, mv: &Move) -> bool {
    board.cached_moves(mv.from).contains(mv)
}

/// Execute a previously generated legal move
///
/// The stored version of the move is the one executed, so a bare
/// `Move::new(from, to)` proposal still performs castling correctly.
///
/// # Errors
///
/// - [`RulesError::EmptySquare`] if nothing stands on `mv.from`
/// - [`RulesError::IllegalMove`] if `mv` is not in the stored legal-move set
///
/// # Examples
///
/// ```rust
/// use chess_rules::api::{apply, legal_moves_for};
/// use chess_rules::{Board, Move, Square};
///
/// let mut board = Board::new();
/// let e2 = Square::new(6, 4);
/// legal_moves_for(&mut board, e2);
/// let outcome = apply(&mut board, Move::new(e2, Square::new(4, 4))).unwrap();
/// assert!(!outcome.was_capture);
/// ```
pub fn apply(board: &mut Board, mv: Move) -> RulesResult<MoveOutcome> {
    if board.is_empty(mv.from) {
        warn!(%mv, "rejected move from an empty square");
        return Err(RulesError::EmptySquare { square: mv.from });
    }

    let Some(&stored) = board.cached_moves(mv.from).iter().find(|m| **m == mv) else {
        warn!(%mv, "rejected move outside the legal-move set");
        return Err(RulesError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    };

    board.execute(stored, false)
}

pub fn last_move(board: &Board) -> Option<Move> {
    board.last_move()
}
