//! Command-line configuration
//!
//! Selects who plays each side and how the session is reported.
//!
//! # Examples
//!
//! ```text
//! chess_selfplay --seed 42                      # two random players, reproducible
//! chess_selfplay --white human --black random   # play White from stdin
//! chess_selfplay --seed 7 --json --log-level warn
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default number of plies before an unfinished game is abandoned
pub const DEFAULT_MAX_PLIES: usize = 400;

#[derive(Parser, Debug, Clone)]
#[command(name = "chess_selfplay", version, about = "Play chess on the terminal against a random mover")]
pub struct Args {
    /// Who moves the white pieces
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub white: PlayerKind,

    /// Who moves the black pieces
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub black: PlayerKind,

    /// Seed for the random players; omitted means seeded from the OS
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop an unfinished game after this many plies
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    pub max_plies: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the finished game as JSON instead of the final board
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed on stdin, e.g. `e2e4`
    Human,
    /// Uniformly random legal move
    Random,
}

impl Args {
    pub fn has_human(&self) -> bool {
        self.white == PlayerKind::Human || self.black == PlayerKind::Human
    }
}
