//! Self-play training pipeline
//!
//! Scripted opponents play the human side against a real engine so the
//! experience store can be warmed up before facing people. Observers report
//! progress and tallies.

pub mod observers;
pub mod opponents;
pub mod training;

pub use observers::{OutcomeTally, ProgressObserver};
pub use opponents::Opponent;
pub use training::{TrainingConfig, TrainingResult, TrainingSession};
