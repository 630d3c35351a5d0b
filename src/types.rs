//! Newtype wrappers and shared constants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell index on the game board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < BOARD_SIZE {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Learned desirability of a board. Positive means the computer tends to win from it.
pub type Score = i64;

/// Board size constant for Tic-Tac-Toe.
pub const BOARD_SIZE: usize = 9;

/// Credit assignment constants.
pub mod credit {
    /// Trajectories longer than this many boards earn a length bonus
    /// when the computer did not win.
    pub const LONG_GAME_THRESHOLD: usize = 6;
}
