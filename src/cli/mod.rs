//! CLI infrastructure for the tic-tac-toe learner
//!
//! The terminal front end plays the presentation role: it feeds moves into
//! the engine and renders its notifications.

pub mod commands;
pub mod config;
pub mod output;
