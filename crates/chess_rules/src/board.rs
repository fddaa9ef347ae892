//! Board state and square queries
//!
//! The board is a flat array of 64 optional piece slots. A slot exclusively owns the
//! piece standing on it, so a piece can never be referenced from two squares at once.
//! Alongside the slots the board keeps the last executed move and, per square, the
//! legal-move set most recently generated for the piece standing there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{RulesError, RulesResult};
use crate::types::*;

/// Deserialization checks the slot count and [`Board::validate`]; the move cache is
/// never serialized and starts out empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BoardFields")]
pub struct Board {
    squares: Vec<Option<Piece>>,
    last_move: Option<Move>,
    #[serde(skip)]
    move_cache: Vec<MoveSet>,
}

#[derive(Deserialize)]
struct BoardFields {
    squares: Vec<Option<Piece>>,
    #[serde(default)]
    last_move: Option<Move>,
}

impl TryFrom<BoardFields> for Board {
    type Error = RulesError;

    fn try_from(fields: BoardFields) -> RulesResult<Self> {
        if fields.squares.len() != SQUARE_COUNT {
            return Err(RulesError::SquareCount {
                count: fields.squares.len(),
            });
        }
        let board = Board {
            squares: fields.squares,
            last_move: fields.last_move,
            move_cache: empty_move_cache(),
        };
        board.validate()?;
        Ok(board)
    }
}

fn empty_move_cache() -> Vec<MoveSet> {
    vec![MoveSet::new(); SQUARE_COUNT]
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Board with the standard initial placement
    pub fn new() -> Self {
        let mut board = Board::empty();
        for side in [Side::White, Side::Black] {
            for (col, kind) in SETUP.iter().enumerate() {
                board.put(Square::new(side.back_row(), col as u8), Some(Piece::new(*kind, side)));
                board.put(
                    Square::new(side.pawn_row(), col as u8),
                    Some(Piece::new(PieceKind::Pawn, side)),
                );
            }
        }
        board
    }

    /// Board without any pieces
    ///
    /// Legality queries are meaningless until both kings are placed; prefer
    /// [`Board::from_pieces`] for custom positions.
    pub fn empty() -> Self {
        Board {
            squares: vec![None; SQUARE_COUNT],
            last_move: None,
            move_cache: empty_move_cache(),
        }
    }

    /// Build a custom position
    ///
    /// # Errors
    ///
    /// - [`RulesError::DuplicateSquare`] if two pieces share a square
    /// - [`RulesError::KingCount`] unless each side has exactly one king
    /// - [`RulesError::EnPassantCount`] if more than one pawn is en passant eligible
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::{Board, Piece, PieceKind, Side, Square};
    ///
    /// let board = Board::from_pieces(&[
    ///     (Square::new(7, 4), Piece::new(PieceKind::King, Side::White)),
    ///     (Square::new(0, 4), Piece::new(PieceKind::King, Side::Black)),
    /// ])
    /// .unwrap();
    /// assert_eq!(board.count_pieces(Side::White), 1);
    /// ```
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> RulesResult<Self> {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            if board.put(square, Some(piece)).is_some() {
                return Err(RulesError::DuplicateSquare { square });
            }
        }
        board.validate()?;
        Ok(board)
    }

    /// Check the one-king-per-side and single en-passant pawn invariants
    pub fn validate(&self) -> RulesResult<()> {
        let eligible = Square::all()
            .filter(|&sq| self.piece_at(sq).is_some_and(|p| p.en_passant_eligible))
            .count();
        if eligible > 1 {
            return Err(RulesError::EnPassantCount { count: eligible });
        }

        for side in [Side::White, Side::Black] {
            let count = self
                .pieces(side)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(RulesError::KingCount { side, count });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index()].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square.index()].as_mut()
    }

    /// Replace the occupant of `square`, returning the previous one
    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.index()], piece)
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    pub fn occupant(&self, square: Square) -> Option<PieceView> {
        self.piece_at(square).map(Piece::view)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn has_enemy_piece(&self, square: Square, side: Side) -> bool {
        self.piece_at(square).is_some_and(|p| p.is_enemy_of(side))
    }

    #[inline]
    pub fn is_empty_or_enemy(&self, square: Square, side: Side) -> bool {
        self.piece_at(square).map_or(true, |p| p.is_enemy_of(side))
    }

    /// All occupied squares holding a piece of `side`
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.side == side)
                .map(|piece| (square, *piece))
        })
    }

    pub fn count_pieces(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Square of the pawn currently allowed to be captured en passant
    pub fn en_passant_pawn(&self) -> Option<Square> {
        Square::all().find(|&square| {
            self.piece_at(square)
                .is_some_and(|p| p.kind == PieceKind::Pawn && p.en_passant_eligible)
        })
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    /// Legal-move set last generated for the piece on `square`
    pub fn cached_moves(&self, square: Square) -> &[Move] {
        &self.move_cache[square.index()]
    }

    pub(crate) fn store_moves(&mut self, square: Square, moves: MoveSet) {
        self.move_cache[square.index()] = moves;
    }

    pub(crate) fn clear_move_cache(&mut self) {
        self.move_cache.iter_mut().for_each(Vec::clear);
    }

    /// Text diagram, rank 8 at the top
    pub fn ascii(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIZE as u8 {
            out.push_str(&format!("{} ", BOARD_SIZE - row as usize));
            for col in 0..BOARD_SIZE as u8 {
                let symbol = self
                    .piece_at(Square::new(row, col))
                    .map_or('.', Piece::symbol);
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }
        out.push_str("  ");
        for file in FILE_NAMES {
            out.push(' ');
            out.push(file);
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ascii())
    }
}
