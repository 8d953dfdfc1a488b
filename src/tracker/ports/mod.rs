//! Port contracts for the tracker.
//!
//! Ports define infrastructure-agnostic interfaces used by tracker services.

pub mod snapshot;

pub use snapshot::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
