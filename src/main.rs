//! Terminal chess session driven through the rules core
//!
//! Each side is either a human typing moves on stdin or a uniform random mover.
//! A human may type `reset` to start over. The session ends on checkmate, stalemate,
//! a human quitting, or after `--max-plies` plies.

use anyhow::Context;
use chess_rules::api::{new_game, Game};
use chess_rules::Side;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod players;
mod render;

use cli::{Args, PlayerKind};
use players::{take_turn, HumanPlayer, MovePolicy, RandomPolicy};
use render::{render, status_line, GameRecord};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid --log-level filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut master = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut white = make_player(args.white, &mut master);
    let mut black = make_player(args.black, &mut master);

    let mut game = new_game();
    info!(white = ?args.white, black = ?args.black, seed = ?args.seed, "game started");

    let show_board = !args.json || args.has_human();
    while !game.status().is_over() && game.history().len() < args.max_plies {
        if show_board {
            println!("{}\n", render(&game));
        }
        let player = match game.side_to_move() {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let turn = player.choose(&mut game)?;
        if !take_turn(&mut game, turn)? {
            break;
        }
    }

    report(&game, &args)
}

fn make_player(kind: PlayerKind, master: &mut StdRng) -> Box<dyn MovePolicy> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(std::io::stdin(), std::io::stdout())),
        PlayerKind::Random => Box::new(RandomPolicy::new(StdRng::from_rng(master))),
    }
}

fn report(game: &Game, args: &Args) -> anyhow::Result<()> {
    info!(plies = game.history().len(), status = ?game.status(), "game finished");
    if args.json {
        let record = GameRecord::new(game, args.white, args.black, args.seed);
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", game.board().ascii());
        println!("{} after {} plies", status_line(game), game.history().len());
    }
    Ok(())
}
