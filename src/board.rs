//! The 3x3 board model.
//!
//! Boards are small `Copy` values. Every transition goes through
//! [`Board::apply_move`], which returns a new board and leaves its input
//! untouched, so search branches never share mutable state.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, EMPTY, LINES, MARK_A, MARK_B, N};
use crate::error::{MoveError, ParseError};
use crate::player::{Outcome, Player};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    /// First player's mark (minimizer).
    MarkA,
    /// Second player's mark (maximizer).
    MarkB,
}

impl Cell {
    fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY,
            Cell::MarkA => MARK_A,
            Cell::MarkB => MARK_B,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'A' => Some(Cell::MarkA),
            'O' | 'B' => Some(Cell::MarkB),
            _ => None,
        }
    }
}

/// A zero-based (row, col) pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_range(self) -> bool {
        self.row < N && self.col < N
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Parses either `row,col` (zero-based) or a keypad digit `1`..`9`
/// counted row-major from the top-left cell.
///
/// Parsed coordinates are not range-checked beyond the keypad form;
/// `apply_move` reports anything off the grid.
impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || ParseError::Vertex(s.to_string());

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| bad())?;
            let col = col.trim().parse::<usize>().map_err(|_| bad())?;
            return Ok(Coordinate::new(row, col));
        }

        match s.parse::<usize>() {
            Ok(key @ 1..=CELLS) => Ok(Coordinate::new((key - 1) / N, (key - 1) % N)),
            _ => Err(bad()),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Cell at `coord`, or `None` when off the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        if !coord.in_range() {
            return None;
        }
        Some(self.cells[coord.row][coord.col])
    }

    fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        (0..N).flat_map(move |row| {
            (0..N).map(move |col| (Coordinate::new(row, col), self.cells[row][col]))
        })
    }

    pub fn mark_count(&self, cell: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, c)| c != Cell::Empty)
    }

    /// The player whose turn it is, assuming the minimizer moved first.
    pub fn player_to_move(&self) -> Player {
        if self.mark_count(Cell::MarkA) > self.mark_count(Cell::MarkB) {
            Player::Maximizer
        } else {
            Player::Minimizer
        }
    }

    /// All empty cells in row-major order. Empty iff the board is full.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        self.iter()
            .filter(|&(_, c)| c == Cell::Empty)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Returns a new board with `player`'s mark at `coord`.
    pub fn apply_move(&self, coord: Coordinate, player: Player) -> Result<Board, MoveError> {
        match self.get(coord) {
            None => Err(MoveError::OutOfRange {
                row: coord.row,
                col: coord.col,
            }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[coord.row][coord.col] = player.mark();
                Ok(next)
            }
            Some(_) => Err(MoveError::IllegalMove(coord)),
        }
    }

    /// Mark owning the first complete line, checked in `LINES` order.
    fn winning_mark(&self) -> Option<Cell> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            (a != Cell::Empty && a == b && b == c).then_some(a)
        })
    }

    /// True iff some line is complete or no empty cell remains.
    pub fn is_terminal(&self) -> bool {
        self.winning_mark().is_some() || self.is_full()
    }

    /// Outcome of the board. Only meaningful when [`Board::is_terminal`]
    /// holds; an unfinished board reports `Draw`.
    pub fn winner(&self) -> Outcome {
        match self.winning_mark() {
            Some(Cell::MarkA) => Outcome::MinimizerWins,
            Some(Cell::MarkB) => Outcome::MaximizerWins,
            _ => Outcome::Draw,
        }
    }
}

/// Reads nine cell characters (`X`, `O`, `.`), ignoring whitespace and `/`.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELLS {
            return Err(ParseError::BoardLength(chars.len()));
        }

        let mut board = Board::new();
        for (i, ch) in chars.into_iter().enumerate() {
            board.cells[i / N][i % N] = Cell::from_char(ch).ok_or(ParseError::Cell(ch))?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
