//! Filesystem adapters.

mod snapshot;

pub use snapshot::{JsonFileSnapshotStore, SNAPSHOT_VERSION};
