//! ttt-minimax: play tic-tac-toe against a minimax engine.
//!
//! ## Usage
//!
//! - `ttt-minimax` - Play O against the engine (same as `play`)
//! - `ttt-minimax play --human x` - Play X, the engine plays O
//! - `ttt-minimax selfplay` - Engine X against an automated O
//! - `ttt-minimax analyze XX./OO./...` - Score every move in a position

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ttt_minimax::board::{Board, Mark};
use ttt_minimax::constants::DEFAULT_LOG_LEVEL;
use ttt_minimax::game::{Game, Outcome};
use ttt_minimax::player::{HumanPlayer, MinimaxPlayer, Player, RandomPlayer};
use ttt_minimax::search::{best_move, evaluate_moves};

/// ttt-minimax: tic-tac-toe against an exhaustive minimax search
#[derive(Parser)]
#[command(name = "ttt-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine on the terminal
    Play {
        /// Which mark the human plays
        #[arg(long, value_enum, default_value_t = Side::O)]
        human: Side,
    },
    /// Let the engine (X) play a full game against an automated O
    Selfplay {
        /// Who plays O
        #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
        opponent: Opponent,
        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the win-count of every move in a position
    Analyze {
        /// Board as 9 cells, e.g. "XX./OO./..." ('.', '-' or '_' for empty)
        board: String,
        /// Side to move; must match the side due by the mark counts
        #[arg(long, value_enum)]
        mark: Option<Side>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Mark {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Opponent {
    Minimax,
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Play { human }) => run_play(human.into()),
        None => run_play(Mark::O),
        Some(Commands::Selfplay { opponent, seed }) => run_selfplay(opponent, seed),
        Some(Commands::Analyze { board, mark }) => run_analyze(&board, mark.map(Mark::from)),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_play(human_mark: Mark) -> Result<()> {
    let mut out = io::stdout();
    writeln!(out, "{}", Board::new())?;

    let human: Box<dyn Player> = Box::new(HumanPlayer::new(io::stdin().lock(), io::stdout()));
    let engine: Box<dyn Player> = Box::new(MinimaxPlayer::new());
    let (mut x, mut o) = match human_mark {
        Mark::X => (human, engine),
        Mark::O => (engine, human),
    };

    info!(human = %human_mark, engine = %human_mark.opponent(), "starting game");
    Game::new()
        .play(x.as_mut(), o.as_mut(), &mut out)
        .context("game aborted")?;
    Ok(())
}

fn run_selfplay(opponent: Opponent, seed: Option<u64>) -> Result<()> {
    let mut engine = MinimaxPlayer::new();
    let mut o: Box<dyn Player> = match opponent {
        Opponent::Minimax => Box::new(MinimaxPlayer::new()),
        Opponent::Random => {
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            info!(seed, "random opponent");
            Box::new(RandomPlayer::with_seed(seed))
        }
    };

    let mut out = io::stdout();
    let mut game = Game::new();
    let outcome = game
        .play(&mut engine, o.as_mut(), &mut out)
        .context("self-play aborted")?;
    info!(%outcome, plies = game.history().len(), "self-play finished");
    Ok(())
}

fn run_analyze(text: &str, mark: Option<Mark>) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("could not parse board '{text}'"))?;
    let game = Game::from_board(board)?;
    let mark = mark.unwrap_or_else(|| game.to_move());
    game.check_turn(mark)
        .with_context(|| format!("cannot analyze '{text}' for {mark}"))?;

    println!("{board}");
    if let Some(outcome) = Outcome::of(&board) {
        println!("{outcome}");
        return Ok(());
    }

    println!("{mark} to move");
    for ((row, col), wins) in evaluate_moves(&board, mark == Mark::X) {
        println!("  {row},{col}  wins={wins}");
    }
    if let Some((row, col)) = best_move(&board, mark) {
        println!("Best move: {row},{col}");
    }
    Ok(())
}
