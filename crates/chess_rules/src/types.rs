//! # Rules Core Types - Squares, Pieces & Moves
//!
//! ## Overview
//!
//! This module defines the value types every other part of the rules core passes
//! around. All of them are small `Copy` types so they can be stored in the flat board
//! array and in move lists without any ownership bookkeeping.
//!
//! ## `Square` - Bounds-Checked Coordinates
//!
//! A `Square` can only be constructed inside the 8×8 grid. Offset arithmetic goes
//! through [`Square::offset`], which returns `None` as soon as a delta leaves the
//! board, so move generators never need their own edge checks.
//!
//! ## `Piece` - Identity Plus Two Flags
//!
//! A piece is its kind and side plus:
//! - `has_moved` - consulted by pawn double steps and castling
//! - `en_passant_eligible` - set only on a pawn that has just advanced two rows, and
//!   cleared before any other move is executed
//!
//! ## `Move` - Coordinates First
//!
//! Two moves are equal when their origin and destination match. The captured-piece
//! snapshot and the castling annotation ride along for display and execution but are
//! deliberately left out of `PartialEq`/`Hash`, so a caller can propose a bare
//! `Move::new(from, to)` and have it matched against the generated set.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::RulesError;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Side::White => WHITE_BACK_ROW,
            Side::Black => BLACK_BACK_ROW,
        }
    }

    pub fn pawn_row(self) -> u8 {
        match self {
            Side::White => WHITE_PAWN_ROW,
            Side::Black => BLACK_PAWN_ROW,
        }
    }

    pub fn en_passant_row(self) -> u8 {
        match self {
            Side::White => WHITE_EN_PASSANT_ROW,
            Side::Black => BLACK_EN_PASSANT_ROW,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Sliding directions, empty for the stepping kinds
    pub fn slide_dirs(self) -> &'static [(i8, i8)] {
        match self {
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Rook => &ROOK_DIRS,
            PieceKind::Queen => &QUEEN_DIRS,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
        }
    }

    /// Single-letter symbol, upper case for white in [`Piece::symbol`]
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece as stored in a board slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
    pub en_passant_eligible: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            has_moved: false,
            en_passant_eligible: false,
        }
    }

    /// Same piece, flagged as having moved before
    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    pub fn is_enemy_of(&self, side: Side) -> bool {
        self.side != side
    }

    pub fn view(&self) -> PieceView {
        PieceView {
            kind: self.kind,
            side: self.side,
        }
    }

    pub fn symbol(&self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

/// Read-only projection of a piece for renderers and policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub side: Side,
}

/// A cell coordinate, always inside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareFields")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked serialized form of a [`Square`]
#[derive(Deserialize)]
struct SquareFields {
    row: i32,
    col: i32,
}

impl TryFrom<SquareFields> for Square {
    type Error = RulesError;

    fn try_from(fields: SquareFields) -> Result<Self, Self::Error> {
        Square::checked(fields.row, fields.col)
    }
}

impl Square {
    /// Build a square from known-good coordinates
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is outside `0..8`. Use [`Square::try_new`] for
    /// coordinates computed at runtime.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "square ({row}, {col}) is off the board"
        );
        Square { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if Self::in_range(row) && Self::in_range(col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Fallible constructor for coordinates coming from outside the core
    pub fn checked(row: i32, col: i32) -> Result<Self, RulesError> {
        let in_range = |c: i32| c >= 0 && (c as usize) < BOARD_SIZE;
        if in_range(row) && in_range(col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::InvalidSquare { row, col })
        }
    }

    #[inline]
    pub fn in_range(coord: i8) -> bool {
        coord >= 0 && (coord as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Index into the flat 64-slot board
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Square {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILE_NAMES[self.col as usize],
            BOARD_SIZE - self.row as usize
        )
    }
}

impl FromStr for Square {
    type Err = RulesError;

    /// Parse algebraic names such as `"e2"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || RulesError::ParseSquare {
            input: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(parse_error());
        };

        let col = FILE_NAMES
            .iter()
            .position(|&name| name == file.to_ascii_lowercase())
            .ok_or_else(parse_error)?;
        let rank = rank.to_digit(10).ok_or_else(parse_error)? as usize;
        if !(1..=BOARD_SIZE).contains(&rank) {
            return Err(parse_error());
        }

        Ok(Square::new((BOARD_SIZE - rank) as u8, col as u8))
    }
}

/// A move from one square to another
///
/// `captured` is a snapshot of the destination occupant at generation time and
/// `castling_rook` is the column of the rook a castling king brings along. Neither
/// takes part in equality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "MoveFields")]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceView>,
    pub castling_rook: Option<u8>,
}

#[derive(Deserialize)]
struct MoveFields {
    from: Square,
    to: Square,
    #[serde(default)]
    captured: Option<PieceView>,
    #[serde(default)]
    castling_rook: Option<u8>,
}

impl TryFrom<MoveFields> for Move {
    type Error = RulesError;

    fn try_from(fields: MoveFields) -> Result<Self, Self::Error> {
        if let Some(col) = fields.castling_rook {
            Square::checked(fields.from.row() as i32, col as i32)?;
        }
        Ok(Move {
            from: fields.from,
            to: fields.to,
            captured: fields.captured,
            castling_rook: fields.castling_rook,
        })
    }
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            castling_rook: None,
        }
    }

    pub(crate) fn with_capture(mut self, captured: Option<PieceView>) -> Self {
        self.captured = captured;
        self
    }

    pub(crate) fn with_castling_rook(mut self, rook_col: u8) -> Self {
        self.castling_rook = Some(rook_col);
        self
    }

    pub fn col_delta(&self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    pub fn row_delta(&self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = RulesError;

    /// Parse coordinate notation such as `"e2e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(RulesError::ParseSquare {
                input: s.to_string(),
            });
        }
        let from = s[..2].parse()?;
        let to = s[2..].parse()?;
        Ok(Move::new(from, to))
    }
}

/// Legal-move set for one piece
pub type MoveSet = Vec<Move>;

/// What a caller observes after a move is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub was_capture: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}
