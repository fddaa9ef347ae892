//! Knight move generation
//!
//! Knights jump to the 8 fixed L-shaped offsets, ignoring anything in between. A
//! destination is admitted when it is on the board and empty or enemy-occupied.

use crate::board::Board;
use crate::constants::KNIGHT_DELTAS;
use crate::types::*;

pub(super) fn generate_knight_moves(board: &Board, from: Square, side: Side, moves: &mut MoveSet) {
    push_steps(board, from, side, &KNIGHT_DELTAS, moves);
}

/// Single-step admission shared by knights and kings
pub(super) fn push_steps(
    board: &Board,
    from: Square,
    side: Side,
    deltas: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in deltas {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.is_empty_or_enemy(to, side) {
            moves.push(Move::new(from, to).with_capture(board.occupant(to)));
        }
    }
}
