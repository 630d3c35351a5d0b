//! Experience-based learning for the computer player
//!
//! The store keeps a value table of board scores, grows it from finished
//! games, and picks the computer's move greedily from it.

pub mod credit;
pub mod snapshot;
pub mod store;
pub mod trajectory;
pub mod value_table;

pub use credit::{credit_scores, credit_trajectory};
pub use snapshot::Snapshot;
pub use store::ExperienceStore;
pub use trajectory::Trajectory;
pub use value_table::ValueTable;
