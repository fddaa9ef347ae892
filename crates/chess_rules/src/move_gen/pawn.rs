//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//!
//! Promotion is not a separate move: any pawn move ending on row 0 or 7 is promoted
//! when it is executed.
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, never a capture
//! - **Double push**: two squares if the pawn has not moved yet and both squares are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: from its en-passant row, a pawn may capture an adjacent enemy pawn
//!   that has just double-pushed, landing on the square behind it

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Square the pawn stands on
/// * `pawn` - The pawn itself (side and `has_moved` matter)
/// * `moves` - Output vector to append candidate moves to
pub(super) fn generate_pawn_moves(board: &Board, from: Square, pawn: Piece, moves: &mut MoveSet) {
    let dir = pawn.side.pawn_direction();
    let steps = if pawn.has_moved { 1 } else { 2 };

    for step in 1..=steps {
        match from.offset(dir * step, 0) {
            Some(to) if board.is_empty(to) => moves.push(Move::new(from, to)),
            _ => break,
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(target) = board.piece_at(to).filter(|t| t.is_enemy_of(pawn.side)) {
            moves.push(Move::new(from, to).with_capture(Some(target.view())));
        }
    }

    if from.row() != pawn.side.en_passant_row() {
        return;
    }
    for d_col in [-1, 1] {
        let Some(beside) = from.offset(0, d_col) else {
            continue;
        };
        let victim = board.piece_at(beside).filter(|t| {
            t.is_enemy_of(pawn.side) && t.kind == PieceKind::Pawn && t.en_passant_eligible
        });
        if let (Some(victim), Some(to)) = (victim, from.offset(dir, d_col)) {
            moves.push(Move::new(from, to).with_capture(Some(victim.view())));
        }
    }
}
