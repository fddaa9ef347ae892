//! Move execution, with undo information for speculative moves
//!
//! [`make_move`] carries out every side effect of a move in order:
//!
//! 1. vacate the origin and occupy the destination
//! 2. a pawn landing diagonally on an empty square removes the pawn beside it
//!    (en passant), which stands on the origin row and destination column
//! 3. a pawn reaching row 0 or 7 becomes a queen of its side
//! 4. a king moving two columns brings its rook to the square it crossed
//! 5. the mover is marked as moved and the move becomes `last_move`
//! 6. en-passant eligibility is cleared on every pawn, then granted to the mover
//!    if it was a pawn advancing two rows
//!
//! The legality filter calls [`make_move`], inspects the board and then calls
//! [`unmake_move`], so no board copy is ever made.

use tracing::{info, trace};

use crate::board::Board;
use crate::constants::*;
use crate::error::{RulesError, RulesResult};
use crate::move_gen::is_in_check;
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone)]
pub(crate) struct UndoInfo {
    mv: Move,
    moved_piece: Piece,
    captured: Option<(Square, Piece)>,
    destination_was_empty: bool,
    rook: Option<(Square, Square, Piece)>,
    en_passant_before: Option<Square>,
    last_move_before: Option<Move>,
}

impl UndoInfo {
    /// Capture-or-quiet signal: was the destination occupied before the move?
    ///
    /// An en-passant capture lands on an empty square and reports quiet; its victim
    /// is still kept in `captured` for undo.
    pub(crate) fn was_capture(&self) -> bool {
        !self.destination_was_empty
    }
}

/// Make a move on the board (returns undo information)
///
/// The move is not checked against any legal-move set.
///
/// # Errors
///
/// [`RulesError::EmptySquare`] if nothing stands on `mv.from`.
pub(crate) fn make_move(board: &mut Board, mv: Move) -> RulesResult<UndoInfo> {
    let en_passant_before = board.en_passant_pawn();
    let last_move_before = board.last_move();
    let piece = board
        .take(mv.from)
        .ok_or(RulesError::EmptySquare { square: mv.from })?;

    let destination_was_empty = board.is_empty(mv.to);
    let mut captured = board.put(mv.to, Some(piece)).map(|p| (mv.to, p));
    let mut rook = None;

    match piece.kind {
        PieceKind::Pawn => {
            if mv.col_delta() != 0 && destination_was_empty {
                let victim = Square::new(mv.from.row(), mv.to.col());
                captured = board.take(victim).map(|p| (victim, p));
            }
            if PROMOTION_ROWS.contains(&mv.to.row()) {
                board.put(mv.to, Some(Piece::new(PieceKind::Queen, piece.side)));
            }
        }
        PieceKind::King if mv.col_delta().abs() == CASTLING_KING_STEP => {
            let step = mv.col_delta().signum();
            let rook_col = mv.castling_rook.unwrap_or(if step < 0 {
                QUEENSIDE_ROOK_COL
            } else {
                KINGSIDE_ROOK_COL
            });
            let rook_from = Square::new(mv.from.row(), rook_col);
            if let (Some(rook_piece), Some(rook_to)) = (board.take(rook_from), mv.to.offset(0, -step)) {
                board.put(rook_to, Some(rook_piece.moved()));
                rook = Some((rook_from, rook_to, rook_piece));
            }
        }
        _ => {}
    }

    if let Some(mover) = board.piece_at_mut(mv.to) {
        mover.has_moved = true;
        mover.en_passant_eligible = false;
    }
    board.set_last_move(Some(mv));

    if let Some(square) = en_passant_before {
        if let Some(pawn) = board.piece_at_mut(square) {
            pawn.en_passant_eligible = false;
        }
    }
    if piece.kind == PieceKind::Pawn && mv.row_delta().abs() == 2 {
        if let Some(pawn) = board.piece_at_mut(mv.to) {
            pawn.en_passant_eligible = true;
        }
    }

    Ok(UndoInfo {
        mv,
        moved_piece: piece,
        captured,
        destination_was_empty,
        rook,
        en_passant_before,
        last_move_before,
    })
}

/// Unmake a move on the board
pub(crate) fn unmake_move(board: &mut Board, undo: UndoInfo) {
    board.take(undo.mv.to);
    board.put(undo.mv.from, Some(undo.moved_piece));

    if let Some((square, piece)) = undo.captured {
        board.put(square, Some(piece));
    }
    if let Some((rook_from, rook_to, rook_piece)) = undo.rook {
        board.take(rook_to);
        board.put(rook_from, Some(rook_piece));
    }
    if let Some(square) = undo.en_passant_before {
        if let Some(pawn) = board.piece_at_mut(square) {
            pawn.en_passant_eligible = true;
        }
    }

    board.set_last_move(undo.last_move_before);
}

/// Would playing `mv` leave the mover's own king in check?
///
/// A move whose origin is empty cannot be played at all and counts as illegal.
pub(crate) fn leaves_king_in_check(board: &mut Board, mv: Move) -> bool {
    let Some(side) = board.piece_at(mv.from).map(|p| p.side) else {
        return true;
    };
    match make_move(board, mv) {
        Ok(undo) => {
            let in_check = is_in_check(board, side);
            trace!(%mv, in_check, "speculative move");
            unmake_move(board, undo);
            in_check
        }
        Err(_) => true,
    }
}

impl Board {
    /// Execute a move with all of its side effects
    ///
    /// Every execution invalidates the cached legal-move sets, since they describe
    /// the position before the move. A speculative execution stays silent; a real one
    /// emits the capture-or-quiet notification.
    ///
    /// Membership in the mover's legal-move set is not checked here; see
    /// [`crate::api::apply`].
    pub fn execute(&mut self, mv: Move, speculative: bool) -> RulesResult<MoveOutcome> {
        let undo = make_move(self, mv)?;
        let outcome = MoveOutcome {
            was_capture: undo.was_capture(),
        };

        self.clear_move_cache();
        if !speculative {
            info!(%mv, capture = outcome.was_capture, "move executed");
        }

        Ok(outcome)
    }
}
