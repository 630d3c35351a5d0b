//! Credit assignment: how much each board of a finished game earns

use crate::{
    tictactoe::{Board, Outcome},
    types::{Score, credit::LONG_GAME_THRESHOLD},
};

use super::ValueTable;

/// Per-board credit for a trajectory of `len` boards ending in `outcome`.
///
/// Boards closer to the end of a won game earn more (`i + 1`); boards
/// closer to the end of a lost game are penalized more (`-i`). Games the
/// computer did not win add `max(0, len - 6)` to every board.
///
/// # Examples
///
/// ```
/// use tictactoe_learner::{experience::credit_scores, tictactoe::Outcome};
///
/// assert_eq!(credit_scores(Outcome::Win, 3), vec![1, 2, 3]);
/// assert_eq!(credit_scores(Outcome::Lose, 7), vec![1, 0, -1, -2, -3, -4, -5]);
/// assert_eq!(credit_scores(Outcome::Draw, 9), vec![3; 9]);
/// ```
pub fn credit_scores(outcome: Outcome, len: usize) -> Vec<Score> {
    let bonus = match outcome {
        Outcome::Win => 0,
        Outcome::Lose | Outcome::Draw => len.saturating_sub(LONG_GAME_THRESHOLD) as Score,
    };

    (0..len as Score)
        .map(|i| {
            let base = match outcome {
                Outcome::Draw => 0,
                Outcome::Win => i + 1,
                Outcome::Lose => -i,
            };
            base + bonus
        })
        .collect()
}

/// Add each board's credit into `table`.
pub fn credit_trajectory(table: &mut ValueTable, outcome: Outcome, boards: &[Board]) {
    for (board, score) in boards.iter().zip(credit_scores(outcome, boards.len())) {
        table.add(board, score);
    }
}
