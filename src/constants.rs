//! Constants for board geometry, winning lines, and display.
//!
//! The board is a fixed 3x3 grid stored row-major in a flat array.
//! Winning lines are described by a start point and a (row, col) step, so
//! the same three-cell walk covers rows, columns, and both diagonals.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Tic-tac-toe is always played on 3x3.
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Maximum game length (one mark per cell).
pub const MAX_GAME_LEN: usize = CELLS;

// =============================================================================
// Winning Lines
// =============================================================================

/// A winning line as `(start_row, start_col, row_step, col_step)`.
pub type Line = (usize, usize, isize, isize);

/// All 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [Line; 8] = [
    (0, 0, 0, 1), // Top row
    (1, 0, 0, 1), // Middle row
    (2, 0, 0, 1), // Bottom row
    (0, 0, 1, 0), // Left column
    (0, 1, 1, 0), // Center column
    (0, 2, 1, 0), // Right column
    (0, 0, 1, 1), // Main diagonal
    (0, 2, 1, -1), // Anti-diagonal
];

// =============================================================================
// Display Glyphs
// =============================================================================

/// Glyph for an X mark.
pub const GLYPH_X: char = 'X';

/// Glyph for an O mark.
pub const GLYPH_O: char = 'O';

/// Glyph for an empty cell when rendering.
pub const GLYPH_EMPTY: char = ' ';

/// Separator printed between rendered rows.
pub const ROW_SEPARATOR: &str = "----------";

// =============================================================================
// Runtime Defaults
// =============================================================================

/// Log filter used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
