//! Boards visited during the current game

use serde::{Deserialize, Serialize};

use crate::tictactoe::Board;

/// Ordered board snapshots, one per placed mark, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    boards: Vec<Board>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the board produced by the latest mark
    pub fn push(&mut self, board: Board) {
        self.boards.push(board);
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn clear(&mut self) {
        self.boards.clear();
    }

    /// Move the boards out, leaving this trajectory empty.
    pub fn take(&mut self) -> Trajectory {
        std::mem::take(self)
    }

    /// The same game seen with human and computer marks swapped.
    #[must_use = "inverted returns a new trajectory; the original is unchanged"]
    pub fn inverted(&self) -> Trajectory {
        self.boards.iter().map(Board::inverted).collect()
    }
}

impl FromIterator<Board> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Board>>(iter: I) -> Self {
        Self {
            boards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        ["X        ", "XO       ", "XO  X    "]
            .into_iter()
            .map(|key| Board::from_key(key).unwrap())
            .collect()
    }

    #[test]
    fn test_inverted_twice_is_identity() {
        let trajectory = sample();
        assert_eq!(trajectory.inverted().inverted(), trajectory);
    }

    #[test]
    fn test_inverted_keeps_order() {
        let keys: Vec<String> = sample().inverted().boards().iter().map(Board::key).collect();
        assert_eq!(keys, vec!["O        ", "OX       ", "OX  O    "]);
    }

    #[test]
    fn test_take_empties() {
        let mut trajectory = sample();
        let taken = trajectory.take();
        assert!(trajectory.is_empty());
        assert_eq!(taken.len(), 3);
    }
}
