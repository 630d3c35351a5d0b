//! Self-play training through the public pipeline API.

use tempfile::tempdir;
use tictactoe_learner::{
    Board, GameEngine,
    experience::ExperienceStore,
    pipeline::{Opponent, TrainingConfig, TrainingResult, TrainingSession},
};

fn session(games: usize, opponent: Opponent, seed: u64) -> TrainingSession {
    let config = TrainingConfig {
        num_games: games,
        opponent,
        seed: Some(seed),
        progress: false,
    };
    TrainingSession::new(GameEngine::new(ExperienceStore::new()), config).unwrap()
}

#[test]
fn test_every_game_is_tallied() {
    for opponent in Opponent::ALL {
        let mut session = session(40, opponent, 3);
        let result = session.run().unwrap();
        assert_eq!(result.total_games, 40, "{opponent}");
        assert_eq!(result.wins + result.draws + result.losses, 40);
        assert!(result.table_size > 0);
    }
}

#[test]
fn test_training_is_reproducible() {
    let mut a = session(60, Opponent::Random, 11);
    let mut b = session(60, Opponent::Random, 11);
    let ra = a.run().unwrap();
    let rb = b.run().unwrap();

    assert_eq!((ra.wins, ra.draws, ra.losses), (rb.wins, rb.draws, rb.losses));
    assert_eq!(
        a.into_engine().learner().export_snapshot(),
        b.into_engine().learner().export_snapshot()
    );
}

#[test]
fn test_trained_engine_keeps_playing() {
    let mut session = session(100, Opponent::Tactical, 5);
    session.run().unwrap();
    let mut engine = session.into_engine();

    engine.resume(Board::new());
    let reply = engine.human_move(4).unwrap();
    assert!(reply.is_some_and(|cell| cell != 4));
}

#[test]
fn test_summary_file_roundtrip() {
    let mut session = session(20, Opponent::FirstOpen, 9);
    let result = session.run().unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.json");
    result.save(&path).unwrap();
    let loaded = TrainingResult::load(&path).unwrap();

    assert_eq!(loaded.total_games, result.total_games);
    assert_eq!(loaded.wins, result.wins);
    assert_eq!(loaded.table_size, result.table_size);
}
