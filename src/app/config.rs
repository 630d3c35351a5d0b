//! Configuration types for engine creation.

use std::path::PathBuf;

/// Configuration for creating a game engine.
///
/// # Examples
///
/// ```
/// use tictactoe_learner::app::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_bootstrap("trained.json");
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Seed for the opening coin flip
    pub seed: Option<u64>,
    /// Snapshot to pre-populate the value table with
    pub bootstrap: Option<PathBuf>,
}

impl EngineConfig {
    /// Cold start: empty value table, non-deterministic coin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from a previously exported snapshot instead of an empty table.
    pub fn with_bootstrap(mut self, path: impl Into<PathBuf>) -> Self {
        self.bootstrap = Some(path.into());
        self
    }
}
