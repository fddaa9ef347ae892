//! Game lifecycle management
//!
//! A [`Game`] threads the turn explicitly: it owns the board, the side to move, the
//! current status and the list of played moves. Every change goes through
//! [`Game::play`], which validates the proposal, executes it, hands the turn over
//! and reports the resulting status in one step.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::moves::{all_legal_moves, apply, legal_moves_for};
use super::state::game_status;
use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::types::*;

/// A game in progress
///
/// A deserialized game recomputes its status from the board and side to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "GameFields")]
pub struct Game {
    board: Board,
    side_to_move: Side,
    status: GameStatus,
    history: Vec<Move>,
}

#[derive(Deserialize)]
struct GameFields {
    board: Board,
    side_to_move: Side,
    #[serde(default)]
    history: Vec<Move>,
}

impl From<GameFields> for Game {
    fn from(fields: GameFields) -> Self {
        let mut game = Game::from_board(fields.board, fields.side_to_move);
        game.history = fields.history;
        game
    }
}

/// Result of one played move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub mv: Move,
    pub was_capture: bool,
    pub status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        new_game()
    }
}

/// Create a new game with the standard initial position, White to move
pub fn new_game() -> Game {
    Game::from_board(Board::new(), Side::White)
}

/// Reset the game to the starting position
///
/// The board is replaced wholesale.
pub fn reset_game(game: &mut Game) {
    *game = new_game();
}

impl Game {
    /// Start from an arbitrary position
    ///
    /// The status is computed immediately, so a game can start already finished.
    pub fn from_board(mut board: Board, side_to_move: Side) -> Game {
        let status = game_status(&mut board, side_to_move);
        Game {
            board,
            side_to_move,
            status,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal moves of the piece on `square`
    ///
    /// Empty when the square is empty, holds a piece of the side not to move, or
    /// the game is over.
    pub fn legal_moves(&mut self, square: Square) -> MoveSet {
        let ours = self
            .board
            .piece_at(square)
            .is_some_and(|p| p.side == self.side_to_move);
        if !ours || self.status.is_over() {
            return MoveSet::new();
        }
        legal_moves_for(&mut self.board, square)
    }

    /// Every legal move of the side to move
    pub fn all_legal_moves(&mut self) -> MoveSet {
        if self.status.is_over() {
            return MoveSet::new();
        }
        all_legal_moves(&mut self.board, self.side_to_move)
    }

    /// Play `from` → `to` for the side to move
    ///
    /// # Errors
    ///
    /// - [`RulesError::GameOver`] after checkmate or stalemate
    /// - [`RulesError::EmptySquare`] / [`RulesError::WrongSide`] for a bad origin
    /// - [`RulesError::IllegalMove`] if the move is not legal
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::api::new_game;
    /// use chess_rules::{GameStatus, Side};
    ///
    /// let mut game = new_game();
    /// let outcome = game.play("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
    /// assert_eq!(outcome.status, GameStatus::Ongoing);
    /// assert_eq!(game.side_to_move(), Side::Black);
    /// ```
    pub fn play(&mut self, from: Square, to: Square) -> RulesResult<PlayOutcome> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        let side = self.side_to_move;
        match self.board.piece_at(from) {
            None => return Err(RulesError::EmptySquare { square: from }),
            Some(piece) if piece.side != side => {
                warn!(square = %from, %side, "rejected move of the opponent's piece");
                return Err(RulesError::WrongSide { square: from, side });
            }
            Some(_) => {}
        }

        let moves = legal_moves_for(&mut self.board, from);
        let Some(&mv) = moves.iter().find(|m| m.from == from && m.to == to) else {
            warn!(%from, %to, %side, "rejected illegal move");
            return Err(RulesError::IllegalMove { from, to });
        };

        let outcome = apply(&mut self.board, mv)?;
        self.history.push(mv);
        self.side_to_move = side.opponent();
        self.status = game_status(&mut self.board, self.side_to_move);

        info!(
            ply = self.history.len(),
            %side,
            %mv,
            capture = outcome.was_capture,
            status = ?self.status,
            "move played"
        );
        if self.status.is_over() {
            info!(status = ?self.status, plies = self.history.len(), "game over");
        }

        Ok(PlayOutcome {
            mv,
            was_capture: outcome.was_capture,
            status: self.status,
        })
    }

    pub fn play_move(&mut self, mv: Move) -> RulesResult<PlayOutcome> {
        self.play(mv.from, mv.to)
    }
}
