//! Tic-tac-toe board representation and win detection.
//!
//! A [`Board`] is a plain `Copy` value. Placing a mark never touches the
//! receiver; it hands back a fresh board, so sibling positions in the search
//! tree can never observe each other's moves.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, GLYPH_EMPTY, GLYPH_O, GLYPH_X, LINES, Line, N, ROW_SEPARATOR};
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Mark::X => GLYPH_X,
            Mark::O => GLYPH_O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single square: `None` is empty.
pub type Cell = Option<Mark>;

/// A `(row, col)` coordinate, both in `0..N`.
pub type Point = (usize, usize);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self { cells: [None; CELLS] }
    }

    /// Build a board from explicit rows, top row first.
    ///
    /// The mark counts are not checked: the caller must supply a board
    /// where X and O are equal or X is one ahead (see [`Board::is_balanced`]).
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                board.cells[Self::idx(row, col)] = cell;
            }
        }
        board
    }

    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// Contents of `(row, col)`. Off-board coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= N || col >= N {
            return None;
        }
        self.cells[Self::idx(row, col)]
    }

    /// Every empty coordinate in row-major order.
    pub fn empty_cells(&self) -> Vec<Point> {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col).is_none())
            .collect()
    }

    /// Return a copy of this board with `mark` at `(row, col)`.
    ///
    /// Fails with [`Error::InvalidMove`] if the coordinate is off the board
    /// or already occupied. `self` is left untouched either way.
    pub fn place(&self, row: usize, col: usize, mark: Mark) -> Result<Board> {
        if row >= N || col >= N || self.get(row, col).is_some() {
            return Err(Error::InvalidMove { row, col });
        }
        Ok(self.with_mark((row, col), mark))
    }

    /// Unchecked placement for callers that already hold an empty point.
    pub(crate) fn with_mark(&self, (row, col): Point, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[Self::idx(row, col)] = Some(mark);
        next
    }

    /// True if any row, column, or diagonal is entirely `mark`.
    pub fn contains_win(&self, mark: Mark) -> bool {
        LINES.iter().any(|&line| self.line_is(line, mark))
    }

    fn line_is(&self, (row, col, d_row, d_col): Line, mark: Mark) -> bool {
        (0..N as isize).all(|i| {
            let r = (row as isize + i * d_row) as usize;
            let c = (col as isize + i * d_col) as usize;
            self.get(r, c) == Some(mark)
        })
    }

    /// The side holding a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| self.contains_win(mark))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// A won or full board: no further moves are played.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// X and O counts are equal, or X is one ahead.
    pub fn is_balanced(&self) -> bool {
        let (xs, os) = (self.count(Mark::X), self.count(Mark::O));
        xs == os || xs == os + 1
    }

    /// [`Board::is_balanced`] as a `Result`, for boards from outside input.
    pub fn check_balanced(&self) -> Result<()> {
        if self.is_balanced() {
            return Ok(());
        }
        Err(Error::InvalidBoard {
            reason: format!(
                "X={}, O={} (must be equal or X ahead by 1)",
                self.count(Mark::X),
                self.count(Mark::O)
            ),
        })
    }

    /// Number of marks on the board.
    pub fn ply(&self) -> usize {
        CELLS - self.empty_cells().len()
    }

    /// The first coordinate (row-major) where `self` and `other` differ.
    ///
    /// Used to recover the move that turned one position into its successor.
    pub fn changed_cell(&self, other: &Board) -> Option<Point> {
        (0..CELLS)
            .find(|&i| self.cells[i] != other.cells[i])
            .map(|i| (i / N, i % N))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row > 0 {
                writeln!(f, "{ROW_SEPARATOR}")?;
            }
            let glyphs: Vec<String> = (0..N)
                .map(|col| self.get(row, col).map_or(GLYPH_EMPTY, Mark::glyph).to_string())
                .collect();
            writeln!(f, "{}", glyphs.join(" | "))?;
        }
        Ok(())
    }
}

/// Parse the compact form used on the command line, e.g. `XX./OO./...`.
///
/// `X`/`O` (either case) are marks; `.`, `-` and `_` are empty cells; `/` and
/// whitespace are ignored. The mark counts must be equal or have X one ahead.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Some(Mark::X)),
                'O' | 'o' => cells.push(Some(Mark::O)),
                '.' | '-' | '_' => cells.push(None),
                '/' => {}
                c if c.is_whitespace() => {}
                other => {
                    return Err(Error::InvalidBoard {
                        reason: format!("unexpected character '{other}'"),
                    });
                }
            }
        }

        if cells.len() != CELLS {
            return Err(Error::InvalidBoard {
                reason: format!("expected {CELLS} cells, got {}", cells.len()),
            });
        }

        let mut board = Board::new();
        board.cells.copy_from_slice(&cells);

        board.check_balanced()?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Some(Mark::X);
    const O: Cell = Some(Mark::O);
    const E: Cell = None;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_balance() {
        assert!(Board::new().is_balanced());
        assert!(Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]).is_balanced());
        let two_x = Board::new()
            .place(0, 0, Mark::X)
            .unwrap()
            .place(1, 1, Mark::X)
            .unwrap();
        assert!(!two_x.is_balanced());
        assert!(matches!(two_x.check_balanced(), Err(Error::InvalidBoard { .. })));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), CELLS);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, E]]);
        assert_eq!(
            board.empty_cells(),
            vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(1, 1, Mark::X).unwrap();
        assert_eq!(next.get(1, 1), X);
        assert_eq!(board.get(1, 1), E);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let board = Board::new().place(0, 0, Mark::X).unwrap();
        let err = board.place(0, 0, Mark::O).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 0, col: 0 }));
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let board = Board::new();
        assert!(board.place(3, 0, Mark::X).is_err());
        assert!(board.place(0, 3, Mark::X).is_err());
    }

    #[test]
    fn test_win_every_line() {
        for &(row, col, d_row, d_col) in LINES.iter() {
            let mut board = Board::new();
            for i in 0..N as isize {
                let r = (row as isize + i * d_row) as usize;
                let c = (col as isize + i * d_col) as usize;
                board = board.place(r, c, Mark::O).unwrap();
            }
            assert!(board.contains_win(Mark::O), "line {:?}", (row, col, d_row, d_col));
            assert!(!board.contains_win(Mark::X));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert!(!board.contains_win(Mark::X));
        assert!(!board.contains_win(Mark::O));
    }

    #[test]
    fn test_half_full_board_is_not_full() {
        let board = Board::from_rows([[X, O, X], [O, X, E], [E, E, E]]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_changed_cell() {
        let board = Board::new();
        let next = board.place(2, 1, Mark::O).unwrap();
        assert_eq!(board.changed_cell(&next), Some((2, 1)));
        assert_eq!(board.changed_cell(&board), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [E, E, E]]);
        let expected = "X |   | O\n----------\n  | X |  \n----------\n  |   |  \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_parse_compact() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board, Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XX./OO./..".parse::<Board>().is_err());
        assert!("XX./OO./..Z".parse::<Board>().is_err());
        // O cannot be ahead of X.
        assert!("OO./.../...".parse::<Board>().is_err());
    }
}
