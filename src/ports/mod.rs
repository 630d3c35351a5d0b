//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The engine depends on a [`Learner`] to choose computer moves, renders
//! through [`GameObserver`]s, and snapshots are persisted through a
//! [`SnapshotRepository`]. Implementations live in `experience`, `pipeline`
//! and `adapters`.

pub mod learner;
pub mod observer;
pub mod repository;

pub use learner::Learner;
pub use observer::{GameObserver, GameOverFn, StateChangedFn};
pub use repository::SnapshotRepository;
