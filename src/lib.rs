//! Tic-tac-toe with a computer player that learns from experience
//!
//! This crate provides:
//! - A game engine that validates moves, detects wins and draws, and
//!   notifies observers of every state change
//! - An experience store that credits finished games into a value table
//!   and picks the computer's moves greedily from it
//! - Snapshot persistence as JSON or MessagePack
//! - A self-play training pipeline and a terminal front end

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod experience;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use experience::{ExperienceStore, Snapshot};
pub use ports::{GameObserver, Learner, SnapshotRepository};
pub use tictactoe::{Board, Cell, GameEngine, GameState, Outcome, Player, Winner};
pub use types::{Position, Score};
