//! Move generation
//!
//! Moves are produced in two stages:
//!
//! 1. **Candidates** - each piece kind proposes the squares its movement template can
//!    reach on the current board (quiet moves, captures, en passant). This stage never
//!    looks at king safety and is what check detection uses.
//! 2. **Legality filter** - each candidate is played speculatively and dropped if it
//!    leaves the mover's own king in check. Castling is only considered at this stage,
//!    since its preconditions themselves depend on check detection.
//!
//! The filter uses make/unmake on the live board, so the filter stage needs `&mut Board`
//! while the candidate stage only reads.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;

pub use attack::{is_in_check, is_square_attacked};

use tracing::debug;

use crate::board::Board;
use crate::make_unmake::leaves_king_in_check;
use crate::types::*;

/// Candidate moves for the piece on `from`, without the self-check filter
///
/// Castling is never a candidate. An empty square yields no moves.
pub fn candidate_moves(board: &Board, from: Square) -> MoveSet {
    let mut moves = MoveSet::new();
    let Some(&piece) = board.piece_at(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece.side, &mut moves),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => sliding::generate_sliding_moves(
            board,
            from,
            piece.side,
            piece.kind.slide_dirs(),
            &mut moves,
        ),
        PieceKind::King => king::generate_king_moves(board, from, piece.side, &mut moves),
    }

    moves
}

/// Generate the moves of the piece standing on `from`
///
/// With `filter_self_check` set, every candidate that would leave the mover's king in
/// check is removed, castling moves are added, and the result replaces the board's
/// stored legal-move set for `from`. Without it the raw candidates are returned and
/// nothing is stored.
///
/// # Examples
///
/// ```rust
/// use chess_rules::{move_gen::generate, Board, Square};
///
/// let mut board = Board::new();
/// let moves = generate(&mut board, Square::new(6, 4), true);
/// assert_eq!(moves.len(), 2); // e2-e3, e2-e4
/// ```
pub fn generate(board: &mut Board, from: Square, filter_self_check: bool) -> MoveSet {
    let mut moves = candidate_moves(board, from);
    if !filter_self_check {
        return moves;
    }

    moves.retain(|&mv| !leaves_king_in_check(board, mv));

    if let Some(&piece) = board.piece_at(from) {
        if piece.kind == PieceKind::King {
            king::generate_castling_moves(board, from, piece, &mut moves);
        }
    }

    debug!(square = %from, count = moves.len(), "generated legal moves");
    board.store_moves(from, moves.clone());
    moves
}
