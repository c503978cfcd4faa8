//! Tictac-Minimax: optimal tic-tac-toe by exhaustive minimax search.
//!
//! The crate is split into a board model, a stateless player tag, and a
//! search engine, composed by passing values around. The board that matters
//! during a game is owned by the driver (the [`protocol`] engine or the CLI);
//! the search only ever sees copies.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, utility values
//! - [`board`] - Cells, coordinates, move legality and terminal detection
//! - [`player`] - Player tags and game outcomes
//! - [`minimax`] - Exhaustive minimax value and move selection
//! - [`playout`] - Optimal self-play and random playouts
//! - [`protocol`] - Text protocol driver
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use tictac_minimax::board::{Board, Coordinate};
//! use tictac_minimax::minimax::choose_move;
//! use tictac_minimax::player::{Outcome, Player};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let mv = choose_move(&board, Player::Minimizer).unwrap();
//! assert_eq!(mv, Coordinate::new(0, 2));
//!
//! let board = board.apply_move(mv, Player::Minimizer).unwrap();
//! assert!(board.is_terminal());
//! assert_eq!(board.winner(), Outcome::MinimizerWins);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod minimax;
pub mod player;
pub mod playout;
pub mod protocol;
