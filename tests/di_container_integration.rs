//! Integration tests for the application container and snapshot repositories.

use std::path::Path;

use tempfile::tempdir;
use tictactoe_learner::{
    Board, Snapshot, SnapshotRepository,
    adapters::{InMemoryRepository, JsonRepository, MsgPackRepository},
    app::{App, EngineConfig},
    cli::commands::SnapshotFormat,
};

fn trained_app(repository: impl SnapshotRepository + Send + Sync + 'static) -> App {
    App::for_testing()
        .with_repository(repository)
        .with_default_seed(42)
        .build()
}

#[test]
fn test_app_with_in_memory_repository() {
    let app = trained_app(InMemoryRepository::new());
    let mut engine = app.create_engine(EngineConfig::new()).unwrap();
    engine.reset();
    for cell in [0, 4, 8] {
        engine.human_move(cell).unwrap();
    }

    let path = Path::new("learned");
    app.save_store(engine.learner(), path).unwrap();

    let restored = app
        .create_engine(EngineConfig::new().with_bootstrap(path))
        .unwrap();
    assert_eq!(restored.learner().table(), engine.learner().table());
    assert_eq!(
        restored.learner().best_move(&Board::from_key("X        ").unwrap()).unwrap(),
        2
    );
}

#[test]
fn test_missing_bootstrap_is_an_error() {
    let app = trained_app(InMemoryRepository::new());
    assert!(
        app.create_engine(EngineConfig::new().with_bootstrap("nowhere"))
            .is_err()
    );
}

#[test]
fn test_json_file_is_flat_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let snapshot = Snapshot::from_json(r#"{"X O      ": 3, "XO       ": -2}"#).unwrap();

    JsonRepository::new().save(&snapshot, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["X O      "], 3);
    assert_eq!(object["XO       "], -2);
}

#[test]
fn test_extension_selects_encoding() {
    let dir = tempdir().unwrap();
    let snapshot = Snapshot::from_json(r#"{"O        ": 1, "OX       ": 2}"#).unwrap();

    let repository_for = |path: &Path| SnapshotFormat::from_path(path).app(None).snapshot_repository();

    let packed = dir.path().join("snapshot.msgpack");
    repository_for(&packed).save(&snapshot, &packed).unwrap();
    assert_eq!(MsgPackRepository::new().load(&packed).unwrap(), snapshot);
    assert!(JsonRepository::new().load(&packed).is_err());

    let plain = dir.path().join("snapshot.json");
    repository_for(&plain).save(&snapshot, &plain).unwrap();
    assert_eq!(JsonRepository::new().load(&plain).unwrap(), snapshot);
}

#[test]
fn test_uppercase_extension_roundtrips_msgpack() {
    let dir = tempdir().unwrap();
    let snapshot = Snapshot::from_json(r#"{"X        ": -3}"#).unwrap();
    let path = dir.path().join("t.MSGPACK");

    MsgPackRepository::new().save(&snapshot, &path).unwrap();

    let format = SnapshotFormat::from_path(&path);
    assert_eq!(format, SnapshotFormat::Msgpack);
    let loaded = format.app(None).snapshot_repository().load(&path).unwrap();
    assert_eq!(loaded, snapshot);
}

#[test]
fn test_same_seed_same_openings() {
    let openings = |seed: u64| -> Vec<Option<usize>> {
        let app = App::for_testing().with_default_seed(seed).build();
        let mut engine = app.create_engine(EngineConfig::new()).unwrap();
        (0..20)
            .map(|_| {
                engine.reset();
                engine.start_game().unwrap()
            })
            .collect()
    };

    assert_eq!(openings(7), openings(7));
}
