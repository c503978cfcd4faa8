//! Constants for board geometry, line layout, and utilities.
//!
//! The board is a fixed 3x3 grid stored row-major. Every winning line is
//! listed here once, in the order the win check walks them.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// The eight winning lines as (row, col) triples.
/// Order: rows top-to-bottom, columns left-to-right, then the two diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Utilities (from the maximizer's perspective)
// =============================================================================

/// Utility of a board the maximizer has won.
pub const UTILITY_MAX_WIN: i32 = 1;

/// Utility of a board the minimizer has won.
pub const UTILITY_MIN_WIN: i32 = -1;

/// Utility of a drawn board.
pub const UTILITY_DRAW: i32 = 0;

// =============================================================================
// Mark Characters
// =============================================================================

/// First player's mark (minimizer).
pub const MARK_A: char = 'X';

/// Second player's mark (maximizer).
pub const MARK_B: char = 'O';

/// Empty cell.
pub const EMPTY: char = '.';
