//! # Chess Rules Core
//!
//! Board representation, per-piece legal-move generation, check/checkmate/stalemate
//! detection, and the special moves (castling, en passant, promotion).
//!
//! Rendering, input handling and move selection for an automated side live outside
//! this crate; they talk to it only through [`api`].
//!
//! ## Module Organization
//!
//! - `types` - squares, pieces, moves and outcomes
//! - `constants` - board geometry and movement templates
//! - `board` - the 64-slot board with its per-square legal-move cache
//! - `move_gen` - candidate generation, the self-check filter, check detection
//! - `make_unmake` - move execution and its undo record
//! - `api` - the caller-facing operations and the [`api::Game`] session
//!
//! ## Quick Start
//!
//! ```rust
//! use chess_rules::api::new_game;
//! use chess_rules::{GameStatus, Side};
//!
//! let mut game = new_game();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     game.play(from.parse().unwrap(), to.parse().unwrap()).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate { winner: Side::Black });
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
mod make_unmake;
pub mod move_gen;
pub mod types;


pub use board::Board;
pub use error::{RulesError, RulesResult};
pub use types::{GameStatus, Move, MoveOutcome, MoveSet, Piece, PieceKind, PieceView, Side, Square};
