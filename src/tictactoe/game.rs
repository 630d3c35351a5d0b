//! Game engine: board state machine, terminal detection and notifications

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{Board, Cell, Player};
use crate::{
    Error, Result,
    experience::ExperienceStore,
    ports::{GameObserver, GameOverFn, Learner, StateChangedFn},
    types::Position,
};

/// Whether moves are still accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Over,
}

/// Who won a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Computer,
    Draw,
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Winner::Human,
            Player::Computer => Winner::Computer,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Human => write!(f, "human"),
            Winner::Computer => write!(f, "computer"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// Result of a finished game from the computer's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The outcome seen by the other side: win and lose swap, draw stays.
    pub fn mirrored(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl From<Winner> for Outcome {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::Computer => Outcome::Win,
            Winner::Human => Outcome::Lose,
            Winner::Draw => Outcome::Draw,
        }
    }
}

/// A human-vs-computer game.
///
/// The engine owns the board and the learner that picks the computer's
/// moves. Every placed mark is handed to the learner, and the learner is
/// credited once with the outcome when the game ends.
///
/// # Examples
///
/// ```
/// use tictactoe_learner::tictactoe::{GameEngine, GameState};
///
/// let mut engine = GameEngine::default();
/// // The human takes the centre and the computer answers immediately.
/// let reply = engine.human_move(4)?;
/// assert_eq!(reply, Some(0));
/// assert_eq!(engine.state(), GameState::InProgress);
/// # Ok::<(), tictactoe_learner::Error>(())
/// ```
pub struct GameEngine<L: Learner = ExperienceStore> {
    board: Board,
    state: GameState,
    winner: Option<Winner>,
    learner: L,
    observers: Vec<Box<dyn GameObserver>>,
    rng: StdRng,
}

impl<L: Learner> fmt::Debug for GameEngine<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board.key())
            .field("state", &self.state)
            .field("winner", &self.winner)
            .field("learner", &self.learner.name())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for GameEngine<ExperienceStore> {
    fn default() -> Self {
        Self::new(ExperienceStore::new())
    }
}

impl<L: Learner> GameEngine<L> {
    /// Create an engine with an empty board, in progress.
    pub fn new(learner: L) -> Self {
        Self {
            board: Board::new(),
            state: GameState::InProgress,
            winner: None,
            learner,
            observers: Vec::new(),
            rng: StdRng::seed_from_u64(rand::random::<u64>()),
        }
    }

    /// Seed the coin used by [`start_game`](Self::start_game).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Register an observer for every notification kind.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Subscribe a closure to `stateChanged`.
    pub fn on_state_changed(&mut self, handler: impl FnMut(&Board) + 'static) {
        self.subscribe(StateChangedFn(handler));
    }

    /// Subscribe a closure to `gameOver`.
    pub fn on_game_over(&mut self, handler: impl FnMut(Winner, &Board) + 'static) {
        self.subscribe(GameOverFn(handler));
    }

    /// Drop every registered observer.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winner once the game is over, `None` while in progress
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn learner(&self) -> &L {
        &self.learner
    }

    pub fn learner_mut(&mut self) -> &mut L {
        &mut self.learner
    }

    pub fn into_learner(self) -> L {
        self.learner
    }

    /// Clear the board and start accepting moves again.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state = GameState::InProgress;
        self.winner = None;
        self.learner.begin_game();
        self.notify_state_changed();
    }

    /// Continue play from an arbitrary position.
    ///
    /// The position is taken as given: terminal detection runs after the
    /// next placed mark.
    pub fn resume(&mut self, board: Board) {
        self.board = board;
        self.state = GameState::InProgress;
        self.winner = None;
        self.learner.begin_game();
        self.notify_state_changed();
    }

    /// Open a game on a blank board: a fair coin decides whether the
    /// computer moves first. Returns the computer's opening cell, if any.
    ///
    /// Does nothing once any mark has been placed.
    pub fn start_game(&mut self) -> Result<Option<usize>> {
        if self.state != GameState::InProgress || !self.board.is_blank() {
            return Ok(None);
        }

        if self.rng.random_bool(0.5) {
            debug!("coin flip: computer opens");
            self.computer_move()
        } else {
            debug!("coin flip: human opens");
            Ok(None)
        }
    }

    /// Place `mark` at `position`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMark`] if `mark` is [`Cell::Empty`]
    /// - [`Error::GameOver`] if the game has ended
    /// - [`Error::InvalidPosition`] if `position` is not 0-8
    /// - [`Error::CellOccupied`] if the cell already holds a mark
    ///
    /// The board is unchanged when an error is returned.
    pub fn apply_move(&mut self, position: usize, mark: Cell) -> Result<()> {
        let player = mark.player().ok_or(Error::InvalidMark)?;
        if self.state != GameState::InProgress {
            return Err(Error::GameOver);
        }
        let pos = Position::new(position)?.value();
        if !self.board.is_empty(pos) {
            return Err(Error::CellOccupied { position });
        }

        self.board.cells[pos] = mark;
        debug!(position, %player, board = %self.board.key(), "mark placed");

        self.learner.observe(&self.board);
        self.notify_state_changed();
        self.detect_terminal();
        Ok(())
    }

    /// Check the board for a completed line or a full board.
    ///
    /// Lines are scanned rows first, then columns, then diagonals; the first
    /// complete line decides the winner. On a terminal board the game moves
    /// to [`GameState::Over`], the learner is credited and `gameOver` fires.
    pub fn detect_terminal(&mut self) -> Option<Winner> {
        if self.state == GameState::Over {
            return self.winner;
        }

        let winner = match self.board.winner() {
            Some(player) => Winner::from(player),
            None if self.board.is_full() => Winner::Draw,
            None => return None,
        };

        self.winner = Some(winner);
        self.state = GameState::Over;
        info!(%winner, board = %self.board.key(), "game over");

        self.learner.learn(Outcome::from(winner));
        for observer in &mut self.observers {
            observer.on_game_over(winner, &self.board);
        }
        Some(winner)
    }

    /// Lowest index holding an empty cell
    pub fn first_open_cell(&self) -> Option<usize> {
        self.board.first_open_cell()
    }

    /// Let the learner place the computer's mark.
    ///
    /// Returns `Ok(None)` without touching the board when the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOpenCell`] if the board is full.
    pub fn computer_move(&mut self) -> Result<Option<usize>> {
        if self.state != GameState::InProgress {
            return Ok(None);
        }
        if self.first_open_cell().is_none() {
            return Err(Error::NoOpenCell);
        }

        let position = self.learner.select_move(&self.board)?;
        self.apply_move(position, Cell::Computer)?;
        Ok(Some(position))
    }

    /// Place the human's mark, then let the computer answer.
    ///
    /// Returns the computer's reply, `None` if the human's move ended the game.
    pub fn human_move(&mut self, position: usize) -> Result<Option<usize>> {
        self.apply_move(position, Cell::Human)?;
        self.computer_move()
    }

    fn notify_state_changed(&mut self) {
        for observer in &mut self.observers {
            observer.on_state_changed(&self.board);
        }
    }
}
