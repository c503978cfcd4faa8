//! Player tags and game outcomes.
//!
//! A [`Player`] carries no state: it only selects which mark to place and
//! which end of the utility scale the search pursues.

use std::fmt;
use std::str::FromStr;

use crate::board::Cell;
use crate::constants::{MARK_A, MARK_B, UTILITY_DRAW, UTILITY_MAX_WIN, UTILITY_MIN_WIN};
use crate::error::ParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Plays `MarkA` and moves first.
    Minimizer,
    /// Plays `MarkB`.
    Maximizer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Minimizer => Player::Maximizer,
            Player::Maximizer => Player::Minimizer,
        }
    }

    /// The cell value this player places.
    pub fn mark(self) -> Cell {
        match self {
            Player::Minimizer => Cell::MarkA,
            Player::Maximizer => Cell::MarkB,
        }
    }

    /// Whether `candidate` is strictly better than `best` for this player.
    #[inline]
    pub fn prefers(self, candidate: i32, best: i32) -> bool {
        match self {
            Player::Maximizer => candidate > best,
            Player::Minimizer => candidate < best,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Player::Minimizer => MARK_A,
            Player::Maximizer => MARK_B,
        };
        write!(f, "{ch}")
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "min" | "minimizer" => Ok(Player::Minimizer),
            "o" | "max" | "maximizer" => Ok(Player::Maximizer),
            _ => Err(ParseError::Player(s.to_string())),
        }
    }
}

/// Result of a finished board. Always recomputed from the board, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    MinimizerWins,
    MaximizerWins,
    Draw,
}

impl Outcome {
    /// Utility from the maximizer's perspective.
    pub fn utility(self) -> i32 {
        match self {
            Outcome::MaximizerWins => UTILITY_MAX_WIN,
            Outcome::MinimizerWins => UTILITY_MIN_WIN,
            Outcome::Draw => UTILITY_DRAW,
        }
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::MinimizerWins => Some(Player::Minimizer),
            Outcome::MaximizerWins => Some(Player::Maximizer),
            Outcome::Draw => None,
        }
    }
}

impl From<Player> for Outcome {
    fn from(player: Player) -> Self {
        match player {
            Player::Minimizer => Outcome::MinimizerWins,
            Player::Maximizer => Outcome::MaximizerWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Minimizer.opponent(), Player::Maximizer);
        assert_eq!(Player::Maximizer.opponent(), Player::Minimizer);
    }

    #[test]
    fn test_marks() {
        assert_eq!(Player::Minimizer.mark(), Cell::MarkA);
        assert_eq!(Player::Maximizer.mark(), Cell::MarkB);
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(Player::Maximizer.prefers(1, 0));
        assert!(!Player::Maximizer.prefers(0, 0));
        assert!(Player::Minimizer.prefers(-1, 0));
        assert!(!Player::Minimizer.prefers(0, 0));
    }

    #[test]
    fn test_utility() {
        assert_eq!(Outcome::MaximizerWins.utility(), 1);
        assert_eq!(Outcome::MinimizerWins.utility(), -1);
        assert_eq!(Outcome::Draw.utility(), 0);
    }

    #[test]
    fn test_parse_player() {
        assert_eq!("X".parse::<Player>(), Ok(Player::Minimizer));
        assert_eq!("maximizer".parse::<Player>(), Ok(Player::Maximizer));
        assert_eq!("o".parse::<Player>(), Ok(Player::Maximizer));
        assert!("z".parse::<Player>().is_err());
    }
}
