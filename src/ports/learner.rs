//! Learner port - the engine's view of the component that picks computer moves
//!
//! The engine hands every placed board to the learner, asks it for the
//! computer's next cell, and reports the computer's-perspective outcome once
//! per game. The learner never calls back into the engine.

use crate::{
    Result,
    tictactoe::{Board, Outcome},
};

/// Learner trait - move selection plus learning from finished games
///
/// # Examples
///
/// ```
/// use tictactoe_learner::{
///     ports::Learner,
///     tictactoe::{Board, Outcome},
/// };
///
/// /// Always plays the lowest open cell and never learns.
/// struct FirstOpen;
///
/// impl Learner for FirstOpen {
///     fn select_move(&mut self, board: &Board) -> tictactoe_learner::Result<usize> {
///         board
///             .first_open_cell()
///             .ok_or(tictactoe_learner::Error::NoCandidate)
///     }
///
///     fn name(&self) -> &str {
///         "first-open"
///     }
/// }
/// ```
pub trait Learner {
    /// Choose the cell (0-8) where the computer should place its mark.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoCandidate`] if the board has no empty cell.
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    /// Called when a fresh game starts on this learner.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn begin_game(&mut self) {}

    /// Record the board produced by a mark placed by either player.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive learners.
    fn observe(&mut self, _board: &Board) {}

    /// Learn from a completed game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive learners.
    fn learn(&mut self, _outcome: Outcome) {}

    /// Get the learner's name, used in logs and reports.
    fn name(&self) -> &str;
}
