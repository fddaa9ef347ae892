//! Game state queries
//!
//! Functions for detecting checkmate and stalemate.

use tracing::debug;

use crate::board::Board;
use crate::move_gen::{generate, is_in_check};
use crate::types::*;

/// Get the status of the game for the side about to move
///
/// Generates the legal moves of `side_to_move` piece by piece and stops at the first
/// piece that has one. Without any legal move the game is over: checkmate if the king
/// is attacked (the other side wins), stalemate otherwise.
pub fn game_status(board: &mut Board, side_to_move: Side) -> GameStatus {
    let squares: Vec<Square> = board.pieces(side_to_move).map(|(sq, _)| sq).collect();
    for square in squares {
        if !generate(board, square, true).is_empty() {
            return GameStatus::Ongoing;
        }
    }

    let status = if is_in_check(board, side_to_move) {
        GameStatus::Checkmate {
            winner: side_to_move.opponent(),
        }
    } else {
        GameStatus::Stalemate
    };
    debug!(side = %side_to_move, ?status, "no legal moves left");
    status
}
