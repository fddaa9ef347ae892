//! Move selection for each side
//!
//! A [`MovePolicy`] looks at the game and picks the next move for the side to
//! move. Both implementations only ever return moves taken from the game's own
//! legal-move queries, so [`chess_rules::api::Game::play_move`] accepts them.
//!
//! - [`RandomPolicy`] - uniform choice over every legal move of the side
//! - [`HumanPlayer`] - reads coordinate moves such as `e2e4` from a line source, plus
//!   the `reset` and `quit` commands

use std::io::{self, BufRead, BufReader, Read, Stdin, Write};

use anyhow::Context;
use chess_rules::api::{reset_game, Game};
use chess_rules::Move;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

/// What a player wants to do on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Play(Move),
    /// Start over from the initial position
    Reset,
    /// Stop the session
    Quit,
}

pub trait MovePolicy {
    fn choose(&mut self, game: &mut Game) -> anyhow::Result<Turn>;
}

/// Carry out a player's turn on the game
///
/// Returns `false` once the session should stop.
pub fn take_turn(game: &mut Game, turn: Turn) -> anyhow::Result<bool> {
    match turn {
        Turn::Play(mv) => {
            game.play_move(mv)
                .with_context(|| format!("{mv} was chosen but rejected"))?;
            Ok(true)
        }
        Turn::Reset => {
            info!(plies = game.history().len(), "game reset");
            reset_game(game);
            Ok(true)
        }
        Turn::Quit => {
            info!(side = %game.side_to_move(), "player stopped");
            Ok(false)
        }
    }
}

/// Picks uniformly among all legal moves of the side to move
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, game: &mut Game) -> anyhow::Result<Turn> {
        let moves = game.all_legal_moves();
        if moves.is_empty() {
            return Ok(Turn::Quit);
        }
        let mv = moves[self.rng.random_range(0..moves.len())];
        debug!(side = %game.side_to_move(), %mv, choices = moves.len(), "random move");
        Ok(Turn::Play(mv))
    }
}

/// Where a human's moves come from
///
/// Implemented for the shared [`Stdin`] handle, so both sides can read from the
/// terminal without holding its lock between turns.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads moves from a line source, re-prompting until one is legal
///
/// End of input or the word `quit` ends the session; `reset` restarts the game.
pub struct HumanPlayer<R, W> {
    input: R,
    prompt: W,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: LineSource, W: Write> MovePolicy for HumanPlayer<R, W> {
    fn choose(&mut self, game: &mut Game) -> anyhow::Result<Turn> {
        loop {
            write!(self.prompt, "{} to move> ", game.side_to_move())?;
            self.prompt.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read move from input")?;
            let text = line.trim();
            if read == 0 || text.eq_ignore_ascii_case("quit") {
                return Ok(Turn::Quit);
            }
            if text.eq_ignore_ascii_case("reset") {
                return Ok(Turn::Reset);
            }

            let proposal: Move = match text.parse() {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(self.prompt, "{e}; enter moves like e2e4, or reset or quit")?;
                    continue;
                }
            };

            let legal = game.legal_moves(proposal.from);
            if let Some(&mv) = legal.iter().find(|m| **m == proposal) {
                return Ok(Turn::Play(mv));
            }

            warn!(%proposal, "illegal move entered");
            if legal.is_empty() {
                writeln!(self.prompt, "no legal move from {}", proposal.from)?;
            } else {
                let options: Vec<String> = legal.iter().map(|m| m.to.to_string()).collect();
                writeln!(self.prompt, "{} can move to: {}", proposal.from, options.join(" "))?;
            }
        }
    }
}
