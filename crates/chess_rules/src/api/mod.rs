//! Public API for the rules core
//!
//! Everything a renderer, input router or move policy needs, and nothing more.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle and turn order (`Game`, new_game, reset_game)
//! - `moves` - Move queries and execution (legal_moves_for, is_member, apply)
//! - `state` - Terminal-state detection (game_status)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game, Game, PlayOutcome};
pub use moves::{all_legal_moves, apply, is_member, last_move, legal_moves_for, occupant};
pub use state::game_status;
