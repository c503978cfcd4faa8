//! Error types for move application, search, and text input.

use thiserror::Error;

use crate::board::Coordinate;

/// Precondition violations on the board/engine boundary.
///
/// None of these are recovered from inside the crate; the driver decides
/// whether to re-prompt or treat them as a logic error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate lies outside the 3x3 grid.
    #[error("Illegal move: {row},{col} is off the board")]
    OutOfRange { row: usize, col: usize },

    /// Target cell already holds a mark.
    #[error("Illegal move: {0} is not empty")]
    IllegalMove(Coordinate),

    /// The engine was asked to move on a board with no empty cell.
    #[error("no legal move: board is full")]
    NoLegalMove,
}

/// Failure to read a board, coordinate, or player from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 9 cells, got {0}")]
    BoardLength(usize),

    #[error("invalid cell character '{0}'")]
    Cell(char),

    #[error("invalid vertex '{0}'")]
    Vertex(String),

    #[error("invalid player '{0}'")]
    Player(String),
}
