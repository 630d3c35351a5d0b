//! Experience store: learned value table, trajectory collection and move choice

use tracing::{debug, trace};

use super::{Snapshot, Trajectory, ValueTable, credit};
use crate::{
    Error, Result,
    ports::Learner,
    tictactoe::{Board, Cell, Outcome},
    types::Score,
};

/// Experience-based learner for the computer side.
///
/// While a game runs the store collects every board in its trajectory.
/// When the game ends the trajectory is credited into the value table,
/// together with its mark-inverted mirror under the opposite outcome, and
/// the trajectory starts over empty. Moves are chosen greedily from the
/// value table.
///
/// # Examples
///
/// ```
/// use tictactoe_learner::{experience::ExperienceStore, tictactoe::Board};
///
/// let store = ExperienceStore::new();
/// let board = Board::from_key("X O      ")?;
/// assert_eq!(store.best_move(&board)?, 1);
/// # Ok::<(), tictactoe_learner::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExperienceStore {
    table: ValueTable,
    trajectory: Trajectory,
}

impl ExperienceStore {
    /// Create a store with an empty value table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store bootstrapped from a previously exported snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            table: snapshot.into(),
            trajectory: Trajectory::new(),
        }
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Learned score of a board, 0 if never credited
    pub fn score(&self, board: &Board) -> Score {
        self.table.score(board)
    }

    /// Append a board to the current game's trajectory.
    pub fn record_board(&mut self, board: &Board) {
        self.trajectory.push(*board);
    }

    /// Fold the finished game into the value table and clear the trajectory.
    ///
    /// A win also credits the mark-inverted trajectory as a loss and vice
    /// versa; a draw is credited once.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        let trajectory = self.trajectory.take();
        debug!(?outcome, boards = trajectory.len(), "crediting trajectory");

        self.credit_trajectory(outcome, trajectory.boards());
        if outcome != Outcome::Draw {
            self.credit_trajectory(outcome.mirrored(), trajectory.inverted().boards());
        }
    }

    /// Add the credit for `boards` ending in `outcome` to the value table.
    pub fn credit_trajectory(&mut self, outcome: Outcome, boards: &[Board]) {
        credit::credit_trajectory(&mut self.table, outcome, boards);
    }

    /// Every empty cell with the score of the board the computer would
    /// produce by playing there, in ascending cell order.
    pub fn candidates(&self, board: &Board) -> Vec<(usize, Score)> {
        board
            .empty_positions()
            .into_iter()
            .map(|pos| (pos, self.table.score(&board.with_cell(pos, Cell::Computer))))
            .collect()
    }

    /// The cell whose resulting board has the highest learned score.
    ///
    /// Ties go to the lowest cell index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCandidate`] if the board has no empty cell.
    pub fn best_move(&self, board: &Board) -> Result<usize> {
        let mut best: Option<(usize, Score)> = None;
        for (pos, score) in self.candidates(board) {
            trace!(pos, score, "candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos).ok_or(Error::NoCandidate)
    }

    /// Copy the whole value table out.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::from(&self.table)
    }

    /// Replace the whole value table with `snapshot`, without merging or
    /// validating entries.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) {
        debug!(entries = snapshot.len(), "importing snapshot");
        self.table = snapshot.into();
    }
}

impl Learner for ExperienceStore {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        self.best_move(board)
    }

    fn begin_game(&mut self) {
        self.trajectory.clear();
    }

    fn observe(&mut self, board: &Board) {
        self.record_board(board);
    }

    fn learn(&mut self, outcome: Outcome) {
        self.record_outcome(outcome);
    }

    fn name(&self) -> &str {
        "experience"
    }
}
