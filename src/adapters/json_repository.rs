//! JSON implementation of the snapshot repository.
//!
//! Files hold the interchange form of a snapshot: one flat JSON object
//! mapping board keys to integer scores.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, error::Error, experience::Snapshot, ports::SnapshotRepository};

/// JSON-based snapshot repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository {
    pretty: bool,
}

impl JsonRepository {
    /// Create a repository writing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Write one entry per line instead of compact output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl SnapshotRepository for JsonRepository {
    fn save(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, snapshot)?;
        } else {
            serde_json::to_writer(&mut writer, snapshot)?;
        }
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Snapshot> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("table.json");
        let snapshot = Snapshot::from_json(r#"{"X O      ": 3, "XO       ": -1}"#).unwrap();

        let repo = JsonRepository::new().pretty();
        repo.save(&snapshot, &file_path).expect("Failed to save");

        assert_eq!(repo.load(&file_path).expect("Failed to load"), snapshot);
    }

    #[test]
    fn test_compact_file_matches_interchange_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("table.json");
        let snapshot = Snapshot::from_json(r#"{"XO       ": -1}"#).unwrap();

        JsonRepository::new().save(&snapshot, &file_path).unwrap();
        let text = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(text, r#"{"XO       ":-1}"#);
    }

    #[test]
    fn test_load_rejects_non_object() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("bad.json");
        std::fs::write(&file_path, "not json").unwrap();

        let result = JsonRepository::new().load(&file_path);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let result = JsonRepository::new().load(Path::new("/tmp/nonexistent_12345.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
