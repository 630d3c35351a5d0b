//! CLI subcommands

pub mod convert;
pub mod inspect;
pub mod play;
pub mod train;

use std::path::Path;

use clap::ValueEnum;

use crate::{
    adapters::{JsonRepository, MsgPackRepository},
    app::{App, AppBuilder},
};

/// On-disk snapshot encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    /// Flat JSON object of board key to score
    Json,
    /// MessagePack encoding of the same map
    Msgpack,
}

impl SnapshotFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("msgpack") || ext.eq_ignore_ascii_case("mp") => {
                SnapshotFormat::Msgpack
            }
            _ => SnapshotFormat::Json,
        }
    }

    /// Application container whose repository speaks this format.
    pub fn app(self, seed: Option<u64>) -> App {
        let builder = match self {
            SnapshotFormat::Json => AppBuilder::new().with_repository(JsonRepository::new().pretty()),
            SnapshotFormat::Msgpack => AppBuilder::new().with_repository(MsgPackRepository::new()),
        };
        match seed {
            Some(seed) => builder.with_default_seed(seed).build(),
            None => builder.build(),
        }
    }
}

/// Resolve an explicit `--format` or fall back to the path's extension.
pub(crate) fn resolve_format(explicit: Option<SnapshotFormat>, path: &Path) -> SnapshotFormat {
    explicit.unwrap_or_else(|| SnapshotFormat::from_path(path))
}
