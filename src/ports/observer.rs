//! Observer port - lifecycle notifications emitted by the game engine
//!
//! The engine exposes one subscription point per notification kind. Handlers
//! run synchronously, in registration order, before the engine call that
//! triggered them returns.

use std::{cell::RefCell, rc::Rc};

use crate::tictactoe::{Board, Winner};

/// Observer of a running [`GameEngine`](crate::tictactoe::GameEngine).
///
/// # Event Sequence
///
/// 1. `on_state_changed(board)` after `reset()`, `resume()` and every placed mark
/// 2. `on_game_over(winner, board)` once, when the game reaches a terminal board
///
/// # Examples
///
/// ```
/// use tictactoe_learner::{
///     ports::GameObserver,
///     tictactoe::{Board, Winner},
/// };
///
/// struct Scoreboard {
///     human_wins: usize,
/// }
///
/// impl GameObserver for Scoreboard {
///     fn on_game_over(&mut self, winner: Winner, _board: &Board) {
///         if winner == Winner::Human {
///             self.human_wins += 1;
///         }
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called after a reset and after each successful mark placement.
    fn on_state_changed(&mut self, _board: &Board) {}

    /// Called once when the game ends, carrying the winner.
    fn on_game_over(&mut self, _winner: Winner, _board: &Board) {}
}

/// Shared observers let the caller read collected state back after play.
impl<O: GameObserver> GameObserver for Rc<RefCell<O>> {
    fn on_state_changed(&mut self, board: &Board) {
        self.borrow_mut().on_state_changed(board);
    }

    fn on_game_over(&mut self, winner: Winner, board: &Board) {
        self.borrow_mut().on_game_over(winner, board);
    }
}

/// Adapter subscribing a closure to `stateChanged` only.
pub struct StateChangedFn<F>(pub F);

impl<F: FnMut(&Board)> GameObserver for StateChangedFn<F> {
    fn on_state_changed(&mut self, board: &Board) {
        (self.0)(board);
    }
}

/// Adapter subscribing a closure to `gameOver` only.
pub struct GameOverFn<F>(pub F);

impl<F: FnMut(Winner, &Board)> GameObserver for GameOverFn<F> {
    fn on_game_over(&mut self, winner: Winner, board: &Board) {
        (self.0)(winner, board);
    }
}
