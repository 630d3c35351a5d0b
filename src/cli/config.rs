//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::pipeline::Opponent;

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
        }
    }
}

/// Interactive play configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Pause between a finished game and the next one, in milliseconds
    pub delay_ms: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub games: usize,

    /// Opponent type
    pub opponent: Opponent,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            games: 500,
            opponent: Opponent::Random,
        }
    }
}
