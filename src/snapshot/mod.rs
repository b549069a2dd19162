//! Snapshot persistence for grid states

pub mod format;
pub mod store;

pub use format::SnapshotRecord;
pub use store::{create_example_snapshots, SnapshotStore};
