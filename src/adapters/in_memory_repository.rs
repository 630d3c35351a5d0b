//! In-memory snapshot repository for testing.
//!
//! This adapter provides a pure in-memory implementation of SnapshotRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, error::Error, experience::Snapshot, ports::SnapshotRepository};

/// In-memory repository for testing.
///
/// Snapshots are stored as their JSON bytes so that saving and loading goes
/// through the same codec as files do.
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the number of snapshots currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Clear all stored snapshots.
    pub fn clear(&self) {
        self.storage().clear();
    }

    /// Check if a snapshot exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&path.to_string_lossy().to_string())
    }
}

impl SnapshotRepository for InMemoryRepository {
    fn save(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        let bytes = serde_json::to_vec(snapshot)?;
        self.storage().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Snapshot> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load snapshot from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        Ok(serde_json::from_slice(bytes)?)
    }
}
