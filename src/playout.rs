//! Playing games out to the end.
//!
//! Two flavors: optimal self-play, where both sides use [`choose_move`],
//! and random playouts driven by a seedable [`fastrand::Rng`]. Random
//! playouts are mostly useful for sampling reachable boards.

use fastrand::Rng;

use crate::board::{Board, Coordinate};
use crate::error::MoveError;
use crate::minimax::choose_move;

/// Plays both sides optimally from `board` until the game ends.
///
/// Returns the final board and the moves played, in order.
pub fn optimal_playout(board: &Board) -> Result<(Board, Vec<Coordinate>), MoveError> {
    let mut board = *board;
    let mut moves = Vec::new();

    while !board.is_terminal() {
        let to_move = board.player_to_move();
        let mv = choose_move(&board, to_move)?;
        board = board.apply_move(mv, to_move)?;
        moves.push(mv);
    }
    Ok((board, moves))
}

/// Plays uniformly random legal moves from `board` until the game ends.
pub fn random_playout(board: &Board, rng: &mut Rng) -> (Board, Vec<Coordinate>) {
    let mut board = *board;
    let mut moves = Vec::new();

    while let Some((next, mv)) = random_step(&board, rng) {
        board = next;
        moves.push(mv);
    }
    (board, moves)
}

/// A reachable board after at most `plies` random moves from the empty board.
pub fn random_position(rng: &mut Rng, plies: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..plies {
        match random_step(&board, rng) {
            Some((next, _)) => board = next,
            None => break,
        }
    }
    board
}

/// One random move for the side to move, or `None` on a finished board.
fn random_step(board: &Board, rng: &mut Rng) -> Option<(Board, Coordinate)> {
    if board.is_terminal() {
        return None;
    }
    let moves = board.legal_moves();
    let mv = moves[rng.usize(..moves.len())];
    let next = board.apply_move(mv, board.player_to_move()).ok()?;
    Some((next, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::player::Outcome;

    #[test]
    fn test_random_playout_ends_terminal() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..50 {
            let (board, moves) = random_playout(&Board::new(), &mut rng);
            assert!(board.is_terminal());
            assert_eq!(moves.len(), 9 - board.mark_count(Cell::Empty));
        }
    }

    #[test]
    fn test_random_position_is_reachable() {
        let mut rng = Rng::with_seed(42);
        for plies in 0..=9 {
            let board = random_position(&mut rng, plies);
            let a = board.mark_count(Cell::MarkA);
            let b = board.mark_count(Cell::MarkB);
            assert!(a == b || a == b + 1, "bad counts {a}/{b}:\n{board}");
            assert!(a + b <= plies);
        }
    }

    #[test]
    fn test_optimal_playout_from_finished_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let (end, moves) = optimal_playout(&board).unwrap();
        assert_eq!(end, board);
        assert!(moves.is_empty());
        assert_eq!(end.winner(), Outcome::Draw);
    }
}
