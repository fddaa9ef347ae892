//! # Rules Constants - Board Geometry & Movement Templates
//!
//! ## Overview
//!
//! This module centralizes the fixed numbers the rules core is built on: the board
//! dimensions, the special ranks (pawn start, en passant, promotion), and the
//! movement templates for every piece kind.
//!
//! ## Coordinate System
//!
//! Squares are addressed as `(row, col)`:
//! - **row 0** is Black's back rank (rank 8), **row 7** is White's back rank (rank 1)
//! - **col 0** is the a-file, **col 7** is the h-file
//!
//! White pawns therefore advance toward *decreasing* row indices and Black pawns toward
//! *increasing* ones. Every template below is written as a `(d_row, d_col)` delta.
//!
//! ## Movement Templates
//!
//! Knights and kings use fixed step tables (8 entries each). Bishops, rooks and queens
//! use direction tables and slide along each direction until blocked:
//!
//! ```text
//!   (-1,-1) (-1, 0) (-1, 1)
//!   ( 0,-1)    X    ( 0, 1)
//!   ( 1,-1) ( 1, 0) ( 1, 1)
//! ```
//!
//! ## Castling Geometry
//!
//! The king starts on column 4. Queenside castling targets the rook on column 0 and
//! moves the king to column 2 (rook to column 3); kingside targets column 7 and moves
//! the king to column 6 (rook to column 5).

use crate::types::PieceKind;

pub const BOARD_SIZE: usize = 8;
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const WHITE_BACK_ROW: u8 = 7;
pub const BLACK_BACK_ROW: u8 = 0;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const BLACK_PAWN_ROW: u8 = 1;

/// Row a pawn must stand on to capture en passant
pub const WHITE_EN_PASSANT_ROW: u8 = 3;
pub const BLACK_EN_PASSANT_ROW: u8 = 4;

/// Rows on which any arriving pawn is promoted
pub const PROMOTION_ROWS: [u8; 2] = [BLACK_BACK_ROW, WHITE_BACK_ROW];

pub const KING_START_COL: u8 = 4;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const CASTLING_KING_STEP: i8 = 2;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = KING_DELTAS;

/// Back-rank order from the a-file to the h-file, identical for both sides
pub const SETUP: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const FILE_NAMES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
