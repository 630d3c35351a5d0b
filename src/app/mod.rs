//! Application layer with dependency injection container.
//!
//! The container owns infrastructure (the snapshot repository) and hands out
//! engines and stores wired to it.
//!
//! ```text
//!   App ──owns──▶ SnapshotRepository (JsonRepository / MsgPackRepository / InMemoryRepository)
//!    │
//!    └─builds──▶ GameEngine<ExperienceStore>
//! ```

pub mod config;
pub mod container;

pub use config::EngineConfig;
pub use container::{App, AppBuilder};
