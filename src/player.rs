//! Move sources for the turn loop.
//!
//! A [`Player`] looks at the current board and names the cell it wants for
//! its mark. The engine side is [`MinimaxPlayer`]; [`RandomPlayer`] gives a
//! reproducible automated opponent; [`HumanPlayer`] reads `row,col` text
//! from any `BufRead` and re-prompts until it gets a legal cell.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::board::{Board, Mark, Point};
use crate::constants::N;
use crate::error::{Error, Result};
use crate::search::best_move;

/// Something that can choose a move for one side.
pub trait Player {
    fn name(&self) -> &str;

    /// Pick an empty cell on `board` for `mark`.
    fn choose(&mut self, board: &Board, mark: Mark) -> Result<Point>;
}

/// Parse `row,col` text into a point.
///
/// Both values must be integers in `0..N`. Surrounding whitespace is
/// ignored. Occupancy is not checked here.
pub fn parse_move(text: &str) -> Result<Point> {
    let invalid = || Error::InvalidInput {
        input: text.trim().to_string(),
    };

    let mut parts = text.trim().split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;

    if row >= N || col >= N {
        return Err(Error::InvalidMove { row, col });
    }
    Ok((row, col))
}

// =============================================================================
// Engine
// =============================================================================

/// Plays the move chosen by the exhaustive search.
#[derive(Default)]
pub struct MinimaxPlayer;

impl MinimaxPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for MinimaxPlayer {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose(&mut self, board: &Board, mark: Mark) -> Result<Point> {
        best_move(board, mark).ok_or(Error::GameOver)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among the empty cells.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    /// Create a player whose choices are fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, board: &Board, _mark: Mark) -> Result<Point> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(Error::GameOver);
        }
        Ok(empty[self.rng.usize(..empty.len())])
    }
}

// =============================================================================
// Human
// =============================================================================

/// Reads moves as `row,col` lines, prompting on `output`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; `InputClosed` at end of stream.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose(&mut self, board: &Board, mark: Mark) -> Result<Point> {
        writeln!(
            self.output,
            "Select where to place '{mark}' as row,col (e.g. 0,0 for top-left)"
        )?;
        self.output.flush()?;

        loop {
            let line = self.read_line()?;
            let attempt = parse_move(&line).and_then(|(row, col)| {
                board.place(row, col, mark)?;
                Ok((row, col))
            });

            match attempt {
                Ok(pt) => {
                    info!(%mark, ?pt, "human move");
                    return Ok(pt);
                }
                Err(e) => {
                    warn!(error = %e, "rejected human move");
                    writeln!(
                        self.output,
                        "Invalid: {e}. Select where to place '{mark}' as row,col"
                    )?;
                    self.output.flush()?;
                }
            }
        }
    }
}
