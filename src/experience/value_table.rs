//! Value table mapping board keys to learned scores

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{tictactoe::Board, types::Score};

/// Learned desirability of every board the store has seen.
///
/// Entries are created lazily on first write; a board that was never
/// credited scores 0. Keys are the 9-character board keys, stored verbatim,
/// so keys that do not describe a real board simply never match a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTable {
    scores: HashMap<String, Score>,
}

impl ValueTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for a raw key, 0 when absent
    pub fn get(&self, key: &str) -> Score {
        self.scores.get(key).copied().unwrap_or(0)
    }

    /// Score for a board, 0 when absent
    pub fn score(&self, board: &Board) -> Score {
        self.get(&board.key())
    }

    /// Add `delta` to the board's entry, creating it at 0 if needed.
    ///
    /// Scores accumulate without decay; addition saturates at the `i64`
    /// bounds instead of wrapping.
    pub fn add(&mut self, board: &Board, delta: Score) {
        let entry = self.scores.entry(board.key()).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    /// Whether the key has an explicit entry
    pub fn contains(&self, key: &str) -> bool {
        self.scores.contains_key(key)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over (key, score) entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.scores.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Score)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (String, Score)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}
