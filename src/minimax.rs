//! Exhaustive minimax search.
//!
//! The whole game tree below a board is searched with no pruning and no
//! depth limit; a 3x3 board bounds the recursion at nine plies. Values are
//! utilities from the maximizer's perspective: +1 maximizer wins,
//! -1 minimizer wins, 0 draw.
//!
//! Move selection walks candidates in [`Board::legal_moves`] order and only
//! replaces the current best on a strictly better value, so ties always go
//! to the first move in row-major order.

use log::{debug, trace};

use crate::board::{Board, Coordinate};
use crate::error::MoveError;
use crate::player::Player;

/// Recursive value with a running count of visited boards.
fn search(board: &Board, to_move: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if board.is_terminal() {
        return board.winner().utility();
    }

    let mut best: Option<i32> = None;
    for mv in board.legal_moves() {
        // Moves come from legal_moves, so they are in range and empty.
        let Ok(child) = board.apply_move(mv, to_move) else {
            continue;
        };
        let v = search(&child, to_move.opponent(), nodes);
        best = match best {
            Some(b) if !to_move.prefers(v, b) => Some(b),
            _ => Some(v),
        };
    }
    // A non-terminal board always has at least one empty cell.
    best.unwrap_or_else(|| board.winner().utility())
}

/// Minimax value of `board` with `to_move` about to play.
pub fn value(board: &Board, to_move: Player) -> i32 {
    let mut nodes = 0;
    search(board, to_move, &mut nodes)
}

/// Every legal move in row-major order with the value of the board it produces.
///
/// Returns [`MoveError::NoLegalMove`] when the board is full.
pub fn analyze(board: &Board, to_move: Player) -> Result<Vec<(Coordinate, i32)>, MoveError> {
    analyze_counted(board, to_move, &mut 0)
}

fn analyze_counted(
    board: &Board,
    to_move: Player,
    nodes: &mut u64,
) -> Result<Vec<(Coordinate, i32)>, MoveError> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    moves
        .into_iter()
        .map(|mv| {
            let child = board.apply_move(mv, to_move)?;
            let v = search(&child, to_move.opponent(), nodes);
            trace!("candidate {mv} for {to_move}: {v}");
            Ok((mv, v))
        })
        .collect()
}

/// Picks the best move for `to_move`; the first of equally good moves wins.
///
/// Returns [`MoveError::NoLegalMove`] when the board is full. Callers should
/// check [`Board::is_terminal`] first.
pub fn choose_move(board: &Board, to_move: Player) -> Result<Coordinate, MoveError> {
    let mut nodes = 0;
    let candidates = analyze_counted(board, to_move, &mut nodes)?;

    let mut best = candidates[0];
    for &(mv, v) in &candidates[1..] {
        if to_move.prefers(v, best.1) {
            best = (mv, v);
        }
    }

    debug!(
        "{to_move} plays {} (value {}, {nodes} nodes searched)",
        best.0, best.1
    );
    Ok(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Outcome;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_value_of_terminal_board() {
        assert_eq!(value(&board("OOO/XX./X.."), Player::Minimizer), 1);
        assert_eq!(value(&board("XXX/OO./..."), Player::Maximizer), -1);
        assert_eq!(value(&board("XOX/XOO/OXX"), Player::Minimizer), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(value(&Board::new(), Player::Minimizer), 0);
    }

    #[test]
    fn test_minimizer_completes_row() {
        let b = board("XX./OO./...");
        assert_eq!(choose_move(&b, Player::Minimizer), Ok(Coordinate::new(0, 2)));
        assert_eq!(value(&b, Player::Minimizer), Outcome::MinimizerWins.utility());
    }

    #[test]
    fn test_maximizer_takes_win() {
        let b = board("XXO/XO./...");
        assert_eq!(choose_move(&b, Player::Maximizer), Ok(Coordinate::new(2, 0)));
    }

    #[test]
    fn test_maximizer_blocks() {
        // X threatens the left column; every other reply loses at once.
        let b = board("X../.O./X..");
        assert_eq!(choose_move(&b, Player::Maximizer), Ok(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_no_legal_move() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(choose_move(&b, Player::Maximizer), Err(MoveError::NoLegalMove));
        assert_eq!(analyze(&b, Player::Maximizer), Err(MoveError::NoLegalMove));
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Every reply draws from here, so the first empty cell is chosen.
        let b = board("XXO/OOX/X..");
        let candidates = analyze(&b, Player::Maximizer).unwrap();
        assert_eq!(
            candidates,
            vec![(Coordinate::new(2, 1), 0), (Coordinate::new(2, 2), 0)]
        );
        assert_eq!(choose_move(&b, Player::Maximizer), Ok(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_analyze_order_matches_legal_moves() {
        let b = board("X../.O./...");
        let moves: Vec<Coordinate> = analyze(&b, Player::Minimizer)
            .unwrap()
            .into_iter()
            .map(|(mv, _)| mv)
            .collect();
        assert_eq!(moves, b.legal_moves());
    }
}
