//! The turn loop: alternate two players until someone wins or the board fills.
//!
//! X always moves first. The board is rendered to the output after every
//! move, and the final outcome is printed as `X WINS`, `O WINS` or `DRAW`.

use std::fmt;
use std::io::Write;

use tracing::info;

use crate::board::{Board, Mark, Point};
use crate::constants::MAX_GAME_LEN;
use crate::error::{Error, Result};
use crate::player::Player;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    /// Outcome of a terminal board, or `None` while play can continue.
    pub fn of(board: &Board) -> Option<Outcome> {
        match board.winner() {
            Some(Mark::X) => Some(Outcome::XWins),
            Some(Mark::O) => Some(Outcome::OWins),
            None if board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X WINS"),
            Outcome::OWins => write!(f, "O WINS"),
            Outcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// A game in progress.
pub struct Game {
    /// Current position
    board: Board,
    /// Moves played so far, in order
    history: Vec<(Mark, Point)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game on an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(MAX_GAME_LEN),
        }
    }

    /// Resume from an arbitrary position. The side to move is derived
    /// from the mark counts, so they must be equal or have X one ahead.
    pub fn from_board(board: Board) -> Result<Self> {
        board.check_balanced()?;
        Ok(Self {
            board,
            history: Vec::with_capacity(MAX_GAME_LEN),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[(Mark, Point)] {
        &self.history
    }

    /// The side whose turn it is: X unless X is already one mark ahead.
    pub fn to_move(&self) -> Mark {
        if self.board.count(Mark::X) > self.board.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Fail unless `mark` is the side due to move.
    pub fn check_turn(&self, mark: Mark) -> Result<()> {
        let due = self.to_move();
        if mark == due {
            return Ok(());
        }
        Err(Error::InvalidBoard {
            reason: format!("{due} is to move here, not {mark}"),
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::of(&self.board)
    }

    /// Apply one move for the side to move.
    pub fn apply(&mut self, (row, col): Point) -> Result<()> {
        if self.outcome().is_some() {
            return Err(Error::GameOver);
        }
        let mark = self.to_move();
        self.board = self.board.place(row, col, mark)?;
        self.history.push((mark, (row, col)));
        info!(%mark, row, col, ply = self.history.len(), "move played");
        Ok(())
    }

    /// Play to the end, asking `x` and `o` for moves in turn.
    ///
    /// Each board is written to `out` after its move, followed by the
    /// outcome line. A player returning an illegal cell aborts the game.
    pub fn play<W: Write>(
        &mut self,
        x: &mut dyn Player,
        o: &mut dyn Player,
        out: &mut W,
    ) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                writeln!(out, "{outcome}")?;
                info!(%outcome, plies = self.history.len(), "game over");
                return Ok(outcome);
            }

            let mark = self.to_move();
            let player: &mut dyn Player = match mark {
                Mark::X => &mut *x,
                Mark::O => &mut *o,
            };
            let pt = player.choose(&self.board, mark)?;
            info!(player = player.name(), %mark, "player chose");
            self.apply(pt)?;

            writeln!(out, "{}", self.board)?;
            out.flush()?;
        }
    }
}
