//! Dependency injection container for the game application.
//!
//! The container owns the snapshot repository and builds engines and stores
//! wired to it.

use std::{path::Path, sync::Arc};

use tracing::info;

use super::config::EngineConfig;
use crate::{
    Result,
    adapters::JsonRepository,
    experience::ExperienceStore,
    ports::SnapshotRepository,
    tictactoe::GameEngine,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use tictactoe_learner::app::{App, EngineConfig};
///
/// let app = App::new();
/// let engine = app.create_engine(EngineConfig::new().with_seed(42))?;
/// assert!(engine.learner().table().is_empty());
/// # Ok::<(), tictactoe_learner::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use tictactoe_learner::app::App;
/// use tictactoe_learner::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    snapshot_repository: Arc<dyn SnapshotRepository + Send + Sync>,
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults: JSON snapshot files and a
    /// non-deterministic coin.
    pub fn new() -> Self {
        Self {
            snapshot_repository: Arc::new(JsonRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the snapshot repository.
    pub fn snapshot_repository(&self) -> Arc<dyn SnapshotRepository + Send + Sync> {
        Arc::clone(&self.snapshot_repository)
    }

    /// Create a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a bootstrap snapshot is configured and cannot be loaded.
    pub fn create_engine(&self, config: EngineConfig) -> Result<GameEngine> {
        let store = match &config.bootstrap {
            Some(path) => self.load_store(path)?,
            None => ExperienceStore::new(),
        };

        let mut engine = GameEngine::new(store);
        if let Some(seed) = config.seed.or(self.default_seed) {
            engine = engine.with_seed(seed);
        }
        Ok(engine)
    }

    /// Load a store bootstrapped from a saved snapshot.
    pub fn load_store(&self, path: &Path) -> Result<ExperienceStore> {
        let snapshot = self.snapshot_repository.load(path)?;
        info!(path = %path.display(), entries = snapshot.len(), "loaded snapshot");
        Ok(ExperienceStore::from_snapshot(snapshot))
    }

    /// Export a store's value table to persistent storage.
    pub fn save_store(&self, store: &ExperienceStore, path: &Path) -> Result<()> {
        let snapshot = store.export_snapshot();
        self.snapshot_repository.save(&snapshot, path)?;
        info!(path = %path.display(), entries = snapshot.len(), "saved snapshot");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
pub struct AppBuilder {
    snapshot_repository: Option<Arc<dyn SnapshotRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            snapshot_repository: None,
            default_seed: None,
        }
    }

    /// Set a custom snapshot repository.
    pub fn with_repository<R: SnapshotRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.snapshot_repository = Some(Arc::new(repo));
        self
    }

    /// Set a default coin seed for all engines created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app. Without a repository, JSON files are used.
    pub fn build(self) -> App {
        App {
            snapshot_repository: self
                .snapshot_repository
                .unwrap_or_else(|| Arc::new(JsonRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
