//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens). Each piece walks
//! every direction in its set until:
//! - the board edge (stop)
//! - a friendly piece (stop, square excluded)
//! - an enemy piece (stop, square included as a capture)

use crate::board::Board;
use crate::types::*;

/// Generate moves for a sliding piece along `dirs`
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Square the piece stands on
/// * `side` - Side of the moving piece
/// * `dirs` - `(d_row, d_col)` directions, see [`PieceKind::slide_dirs`]
/// * `moves` - Output vector to append candidate moves to
pub(super) fn generate_sliding_moves(
    board: &Board,
    from: Square,
    side: Side,
    dirs: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(target) => {
                    if target.is_enemy_of(side) {
                        moves.push(Move::new(from, to).with_capture(Some(target.view())));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
