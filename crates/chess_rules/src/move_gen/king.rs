//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally).
//!
//! ## Castling
//!
//! Castling is not part of the candidate moves because its preconditions depend on
//! check detection, which itself runs candidate generation for the enemy pieces. It is
//! added only by the filtered generator, and only when all of these hold:
//!
//! - the king has not moved and stands on its starting square
//! - the rook on the target corner is a friendly rook that has not moved
//! - every square strictly between king and rook is empty
//! - the king is not in check
//! - the king would not be in check on the square it crosses
//! - the king would not be in check on its destination (with the rook relocated)
//!
//! The resulting move carries the rook's column so execution can relocate it.

use super::attack::is_in_check;
use super::knight::push_steps;
use crate::board::Board;
use crate::constants::*;
use crate::make_unmake::leaves_king_in_check;
use crate::types::*;

pub(super) fn generate_king_moves(board: &Board, from: Square, side: Side, moves: &mut MoveSet) {
    push_steps(board, from, side, &KING_DELTAS, moves);
}

/// Append every castling move currently available to `king`
pub(super) fn generate_castling_moves(
    board: &mut Board,
    from: Square,
    king: Piece,
    moves: &mut MoveSet,
) {
    if king.has_moved || from != Square::new(king.side.back_row(), KING_START_COL) {
        return;
    }
    if is_in_check(board, king.side) {
        return;
    }

    for rook_col in [QUEENSIDE_ROOK_COL, KINGSIDE_ROOK_COL] {
        let row = from.row();
        let rook_ready = board
            .piece_at(Square::new(row, rook_col))
            .is_some_and(|r| r.kind == PieceKind::Rook && r.side == king.side && !r.has_moved);
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_col < from.col() {
            (rook_col + 1, from.col())
        } else {
            (from.col() + 1, rook_col)
        };
        if !(low..high).all(|col| board.is_empty(Square::new(row, col))) {
            continue;
        }

        let step = if rook_col < from.col() { -1 } else { 1 };
        let (Some(crossed), Some(destination)) =
            (from.offset(0, step), from.offset(0, step * CASTLING_KING_STEP))
        else {
            continue;
        };
        if leaves_king_in_check(board, Move::new(from, crossed)) {
            continue;
        }

        let castle = Move::new(from, destination).with_castling_rook(rook_col);
        if leaves_king_in_check(board, castle) {
            continue;
        }
        moves.push(castle);
    }
}
