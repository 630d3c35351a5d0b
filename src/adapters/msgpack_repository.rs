//! MessagePack implementation of the snapshot repository.
//!
//! This adapter implements the SnapshotRepository port using rmp_serde for
//! compact binary storage of large value tables.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{Result, error::Error, experience::Snapshot, ports::SnapshotRepository};

/// MessagePack-based snapshot repository.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_learner::adapters::MsgPackRepository;
/// use tictactoe_learner::experience::ExperienceStore;
/// use tictactoe_learner::ports::SnapshotRepository;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let store = ExperienceStore::new();
///
/// repo.save(&store.export_snapshot(), Path::new("trained.msgpack"))?;
/// let loaded = repo.load(Path::new("trained.msgpack"))?;
/// # Ok::<(), tictactoe_learner::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotRepository for MsgPackRepository {
    fn save(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, snapshot).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize snapshot to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Snapshot> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        rmp_serde::decode::from_read(BufReader::new(file)).map_err(|e| {
            Error::SerializationContext {
                operation: "deserialize snapshot from MessagePack".to_string(),
                message: e.to_string(),
            }
        })
    }
}
