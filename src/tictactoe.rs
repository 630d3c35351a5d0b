//! Tic-Tac-Toe board, winning lines and the game engine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game::{GameEngine, GameState, Outcome, Winner};
pub use lines::{LineAnalyzer, WINNING_LINES};
