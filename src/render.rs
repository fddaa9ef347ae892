//! Text rendering of the game for the terminal

use chess_rules::api::Game;
use chess_rules::GameStatus;
use serde::Serialize;

use crate::cli::PlayerKind;

/// Board diagram followed by the last move and whose turn it is
pub fn render(game: &Game) -> String {
    let mut out = game.board().ascii();
    out.push('\n');
    if let Some(mv) = game.board().last_move() {
        out.push_str(&format!("last move: {mv}\n"));
    }
    out.push_str(&status_line(game));
    out
}

pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::Ongoing => format!("{} to move", game.side_to_move()),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
    }
}

/// Finished game as printed with `--json`
#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub seed: Option<u64>,
    pub plies: usize,
    pub moves: Vec<String>,
    pub status: GameStatus,
    pub final_position: String,
}

impl GameRecord {
    pub fn new(game: &Game, white: PlayerKind, black: PlayerKind, seed: Option<u64>) -> Self {
        Self {
            white,
            black,
            seed,
            plies: game.history().len(),
            moves: game.history().iter().map(ToString::to_string).collect(),
            status: game.status(),
            final_position: game.board().ascii(),
        }
    }
}
