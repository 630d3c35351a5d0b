//! Scripted stand-ins for the human side during self-play training

use std::{fmt, str::FromStr};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    tictactoe::{Board, LineAnalyzer, Player},
};

/// How the scripted human picks its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Opponent {
    /// Uniformly random empty cell
    #[default]
    Random,
    /// Lowest-indexed empty cell, fully deterministic
    FirstOpen,
    /// Complete its own line, else block the computer's, else random
    Tactical,
}

impl Opponent {
    pub const ALL: [Opponent; 3] = [Opponent::Random, Opponent::FirstOpen, Opponent::Tactical];

    /// Pick a cell for the human on `board`, `None` if the board is full.
    pub fn choose<R: Rng + ?Sized>(self, board: &Board, rng: &mut R) -> Option<usize> {
        match self {
            Opponent::Random => board.empty_positions().choose(rng).copied(),
            Opponent::FirstOpen => board.first_open_cell(),
            Opponent::Tactical => LineAnalyzer::winning_moves(&board.cells, Player::Human)
                .into_iter()
                .next()
                .or_else(|| {
                    LineAnalyzer::winning_moves(&board.cells, Player::Computer)
                        .into_iter()
                        .next()
                })
                .or_else(|| Opponent::Random.choose(board, rng)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opponent::Random => "random",
            Opponent::FirstOpen => "first-open",
            Opponent::Tactical => "tactical",
        }
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Opponent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        Opponent::ALL
            .into_iter()
            .find(|o| o.name() == normalised)
            .ok_or_else(|| Error::ParseOpponent {
                input: s.to_string(),
                expected: Opponent::ALL.map(Opponent::name).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_first_open() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = Board::from_key("XO       ").unwrap();
        assert_eq!(Opponent::FirstOpen.choose(&board, &mut rng), Some(2));
    }

    #[test]
    fn test_random_only_picks_empty_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::from_key("XOXOX OXO").unwrap();
        for _ in 0..10 {
            assert_eq!(Opponent::Random.choose(&board, &mut rng), Some(5));
        }
    }

    #[test]
    fn test_full_board_has_no_choice() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = Board::from_key("XOXXOOOXX").unwrap();
        for opponent in Opponent::ALL {
            assert_eq!(opponent.choose(&board, &mut rng), None);
        }
    }

    #[test]
    fn test_tactical_wins_before_blocking() {
        let mut rng = StdRng::seed_from_u64(0);
        // Human can finish the top row; computer threatens the middle row.
        let board = Board::from_key("XX OO    ").unwrap();
        assert_eq!(Opponent::Tactical.choose(&board, &mut rng), Some(2));
    }

    #[test]
    fn test_tactical_blocks() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = Board::from_key("X  OO  X ").unwrap();
        assert_eq!(Opponent::Tactical.choose(&board, &mut rng), Some(5));
    }

    #[test]
    fn test_parse() {
        assert_eq!("first-open".parse::<Opponent>().unwrap(), Opponent::FirstOpen);
        assert_eq!(" Tactical ".parse::<Opponent>().unwrap(), Opponent::Tactical);
        assert!("minimax".parse::<Opponent>().is_err());
    }
}
