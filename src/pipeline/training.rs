//! Self-play training: warm up a value table before facing real players

use std::{cell::RefCell, path::Path, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    observers::{OutcomeTally, ProgressObserver},
    opponents::Opponent,
};
use crate::{
    Error, Result,
    tictactoe::{GameEngine, Winner},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub num_games: usize,

    /// Scripted player taking the human side
    pub opponent: Opponent,

    /// Random seed for the coin flip and the opponent
    pub seed: Option<u64>,

    /// Whether to draw a progress bar
    pub progress: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 500,
            opponent: Opponent::default(),
            seed: None,
            progress: false,
        }
    }
}

/// Result of a training run, from the computer's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    /// Value table entries after training
    pub table_size: usize,
}

impl TrainingResult {
    fn new(tally: OutcomeTally, table_size: usize) -> Self {
        let total_games = tally.total();
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins: tally.computer_wins,
            draws: tally.draws,
            losses: tally.human_wins,
            win_rate: rate(tally.computer_wins),
            draw_rate: rate(tally.draws),
            loss_rate: rate(tally.human_wins),
            table_size,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Plays scripted games against an engine through its public API.
///
/// Each game is `reset`, `start_game`, then `human_move` with the
/// opponent's choice until the engine reports a winner, so the store learns
/// exactly as it would from a real player.
///
/// # Examples
///
/// ```
/// use tictactoe_learner::{
///     pipeline::{Opponent, TrainingConfig, TrainingSession},
///     tictactoe::GameEngine,
/// };
///
/// let config = TrainingConfig {
///     num_games: 20,
///     opponent: Opponent::Random,
///     seed: Some(7),
///     progress: false,
/// };
/// let mut session = TrainingSession::new(GameEngine::default(), config)?;
/// let result = session.run()?;
/// assert_eq!(result.total_games, 20);
/// assert!(result.table_size > 0);
/// # Ok::<(), tictactoe_learner::Error>(())
/// ```
pub struct TrainingSession {
    engine: GameEngine,
    config: TrainingConfig,
    rng: StdRng,
    tally: Rc<RefCell<OutcomeTally>>,
}

impl TrainingSession {
    /// Prepare a session around `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `num_games` is zero.
    pub fn new(engine: GameEngine, config: TrainingConfig) -> Result<Self> {
        if config.num_games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "training needs at least one game".to_string(),
            });
        }

        let (mut engine, rng) = match config.seed {
            Some(seed) => (
                engine.with_seed(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (engine, StdRng::seed_from_u64(rand::random::<u64>())),
        };

        let tally = Rc::new(RefCell::new(OutcomeTally::new()));
        engine.subscribe(Rc::clone(&tally));

        Ok(Self {
            engine,
            config,
            rng,
            tally,
        })
    }

    /// Play all configured games.
    pub fn run(&mut self) -> Result<TrainingResult> {
        info!(
            games = self.config.num_games,
            opponent = %self.config.opponent,
            "training started"
        );

        let progress = if self.config.progress {
            let observer = Rc::new(RefCell::new(ProgressObserver::new(self.config.num_games)?));
            self.engine.subscribe(Rc::clone(&observer));
            Some(observer)
        } else {
            None
        };

        for game in 0..self.config.num_games {
            let winner = self.play_game()?;
            debug!(game, %winner, "training game finished");
        }

        if let Some(observer) = progress {
            observer.borrow().finish();
        }

        let result = self.result();
        info!(
            wins = result.wins,
            draws = result.draws,
            losses = result.losses,
            table_size = result.table_size,
            "training finished"
        );
        Ok(result)
    }

    /// Play a single game to the end and return its winner.
    pub fn play_game(&mut self) -> Result<Winner> {
        self.engine.reset();
        self.engine.start_game()?;

        loop {
            if let Some(winner) = self.engine.winner() {
                return Ok(winner);
            }
            let cell = self
                .config
                .opponent
                .choose(self.engine.board(), &mut self.rng)
                .ok_or(Error::NoOpenCell)?;
            self.engine.human_move(cell)?;
        }
    }

    /// Tally of all games played by this session so far
    pub fn result(&self) -> TrainingResult {
        TrainingResult::new(*self.tally.borrow(), self.engine.learner().table().len())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Hand the trained engine back, detached from the session's observers.
    pub fn into_engine(mut self) -> GameEngine {
        self.engine.clear_observers();
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(num_games: usize, opponent: Opponent) -> TrainingConfig {
        TrainingConfig {
            num_games,
            opponent,
            seed: Some(42),
            progress: false,
        }
    }

    #[test]
    fn test_zero_games_rejected() {
        let result = TrainingSession::new(GameEngine::default(), config(0, Opponent::Random));
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_counts_add_up() {
        let mut session =
            TrainingSession::new(GameEngine::default(), config(50, Opponent::Random)).unwrap();
        let result = session.run().unwrap();
        assert_eq!(result.total_games, 50);
        assert_eq!(result.wins + result.draws + result.losses, 50);
        assert!((result.win_rate + result.draw_rate + result.loss_rate - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            let mut session =
                TrainingSession::new(GameEngine::default(), config(30, Opponent::Tactical))
                    .unwrap();
            session.run().unwrap();
            session.into_engine().into_learner().export_snapshot()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_trajectory_empty_between_games() {
        let mut session =
            TrainingSession::new(GameEngine::default(), config(5, Opponent::FirstOpen)).unwrap();
        for _ in 0..5 {
            session.play_game().unwrap();
            assert!(session.engine().learner().trajectory().is_empty());
        }
    }

    #[test]
    fn test_result_json_roundtrip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("result.json");
        let mut session =
            TrainingSession::new(GameEngine::default(), config(10, Opponent::Random)).unwrap();
        let result = session.run().unwrap();

        result.save(&path).unwrap();
        let loaded = TrainingResult::load(&path).unwrap();
        assert_eq!(loaded.total_games, result.total_games);
        assert_eq!(loaded.wins, result.wins);
        assert_eq!(loaded.table_size, result.table_size);
    }
}
