//! ttt-minimax: tic-tac-toe against an exhaustive minimax search.
//!
//! The engine scores positions by counting reachable X wins rather than
//! with a symmetric +1/0/-1 score, and always searches down to terminal
//! states.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, display glyphs
//! - [`board`] - Immutable 3x3 board, placement and win detection
//! - [`search`] - Minimax search and move selection
//! - [`player`] - Human, random and engine move sources
//! - [`game`] - Turn loop and outcome reporting
//! - [`error`] - Error types for moves and input
//!
//! ## Example
//!
//! ```
//! use ttt_minimax::board::{Board, Mark};
//! use ttt_minimax::search::minimax;
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let result = minimax(board, true, 0);
//! assert!(result.board.contains_win(Mark::X));
//! assert_eq!(result.wins, 1);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod player;
pub mod search;
