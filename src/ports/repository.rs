//! Repository port for snapshot persistence.
//!
//! This module defines the trait boundary between the experience store and
//! the storage used to export and import its value table.

use std::path::Path;

use crate::{Result, experience::Snapshot};

/// Port for persisting and loading value-table snapshots.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_learner::ports::SnapshotRepository;
/// use tictactoe_learner::experience::ExperienceStore;
/// use std::path::Path;
///
/// fn save_store<R: SnapshotRepository>(
///     repo: &R,
///     store: &ExperienceStore,
///     path: &Path,
/// ) -> tictactoe_learner::Result<()> {
///     repo.save(&store.export_snapshot(), path)
/// }
/// ```
pub trait SnapshotRepository {
    /// Save a snapshot to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization fails.
    fn save(&self, snapshot: &Snapshot, path: &Path) -> Result<()>;

    /// Load a snapshot from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be read or holds data that is
    /// not a board-to-score mapping.
    fn load(&self, path: &Path) -> Result<Snapshot>;
}
