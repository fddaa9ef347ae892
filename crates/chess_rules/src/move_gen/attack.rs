//! Attack detection and check
//!
//! A square is attacked by a side when any of that side's pieces has a candidate move
//! ending there, except that pawns attack only diagonally. Check is an attack on the
//! king's square. Candidates never include castling and never run the legality filter,
//! so check detection cannot recurse into itself.
//!
//! ## Performance
//!
//! Every enemy piece is generated once per query, and the legality filter runs one
//! query per candidate move. That nesting is one level deep and bounded by the number
//! of pieces on the board.

use super::candidate_moves;
use crate::board::Board;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified side
///
/// # Arguments
///
/// * `board` - The current board
/// * `square` - Target square to check
/// * `by_side` - Side whose pieces might attack
///
/// # Examples
///
/// ```rust
/// use chess_rules::{move_gen::is_square_attacked, Board, Side, Square};
///
/// let board = Board::new();
/// // f3 is covered by White's g1 knight and e2/g2 pawns
/// assert!(is_square_attacked(&board, "f3".parse().unwrap(), Side::White));
/// assert!(!is_square_attacked(&board, Square::new(4, 4), Side::White));
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_side: Side) -> bool {
    board.pieces(by_side).any(|(from, piece)| {
        if piece.kind == PieceKind::Pawn {
            // forward pushes never capture
            let dir = piece.side.pawn_direction();
            return [-1, 1]
                .iter()
                .any(|&d_col| from.offset(dir, d_col) == Some(square));
        }
        candidate_moves(board, from).iter().any(|mv| mv.to == square)
    })
}

/// Is `side`'s king attacked by any enemy piece?
///
/// A board without a king for `side` is not a valid position; it reports `false`.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };

    is_square_attacked(board, king, side.opponent())
}
