//! Exhaustive minimax search over tic-tac-toe positions.
//!
//! The score is not the usual +1/0/-1. Instead the search counts X wins:
//! a terminal X win adds one to the running count, a terminal O win adds
//! nothing. X (the maximizing side) picks the successor with the highest
//! count, O the lowest. The tree is always expanded down to terminal
//! states; there is no pruning and no static evaluation.
//!
//! Successors are bucketed by their count in an ordered map. When two
//! successors share a count, the one generated later overwrites the earlier
//! one, so ties resolve to the last empty cell in row-major order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::board::{Board, Mark, Point};

/// Outcome of a search: the chosen successor and its win-count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The position after the chosen move (or the input, if terminal).
    pub board: Board,
    /// Number of X wins credited along the chosen line of play.
    pub wins: u32,
}

/// The side to move for a given search flag.
#[inline]
pub fn side_to_move(maximizing: bool) -> Mark {
    if maximizing { Mark::X } else { Mark::O }
}

/// Every board reachable by `mark` playing one empty cell, in row-major order.
pub fn successors(board: &Board, mark: Mark) -> Vec<Board> {
    board
        .empty_cells()
        .into_iter()
        .map(|pt| board.with_mark(pt, mark))
        .collect()
}

/// Recursive minimax over `state`.
///
/// Returns `state` itself when it is already won or full. Otherwise returns
/// the best immediate successor for the side to move together with the
/// win-count that successor's subtree produced.
pub fn minimax(state: Board, maximizing: bool, wins: u32) -> SearchResult {
    if state.contains_win(Mark::O) {
        return SearchResult { board: state, wins };
    }
    if state.contains_win(Mark::X) {
        return SearchResult {
            board: state,
            wins: wins + 1,
        };
    }

    let mark = side_to_move(maximizing);
    let mut by_wins: BTreeMap<u32, Board> = BTreeMap::new();
    for successor in successors(&state, mark) {
        let result = minimax(successor, !maximizing, wins);
        // Later successors overwrite earlier ones with the same count.
        by_wins.insert(result.wins, successor);
    }

    let best = if maximizing {
        by_wins.last_key_value()
    } else {
        by_wins.first_key_value()
    };

    match best {
        Some((&wins, &board)) => SearchResult { board, wins },
        None => SearchResult { board: state, wins },
    }
}

/// Score every legal move for the side to move.
///
/// Each entry pairs the empty cell with the win-count the recursive search
/// assigns to the resulting position. Entries follow row-major order.
pub fn evaluate_moves(board: &Board, maximizing: bool) -> Vec<(Point, u32)> {
    if board.winner().is_some() {
        return Vec::new();
    }
    let mark = side_to_move(maximizing);
    board
        .empty_cells()
        .into_iter()
        .map(|pt| {
            let result = minimax(board.with_mark(pt, mark), !maximizing, 0);
            (pt, result.wins)
        })
        .collect()
}

/// Pick a move for `mark`, or `None` if the game is already over.
///
/// X searches as the maximizing side, O as the minimizing side.
pub fn best_move(board: &Board, mark: Mark) -> Option<Point> {
    if board.is_terminal() {
        return None;
    }
    let result = minimax(*board, mark == Mark::X, 0);
    let pt = board.changed_cell(&result.board);
    debug!(%mark, wins = result.wins, ?pt, "search finished");
    pt
}
