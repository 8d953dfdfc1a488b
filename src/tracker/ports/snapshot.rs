//! Snapshot port for saving and loading the whole project list.

use crate::tracker::domain::Project;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Whole-state persistence contract.
///
/// A snapshot is replaced as one unit: after a failed save, a subsequent
/// load observes the previous snapshot, never a partial one.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Replaces the stored snapshot with `projects`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the snapshot cannot be encoded
    /// or written.
    async fn save(&self, projects: &[Project]) -> SnapshotStoreResult<()>;

    /// Loads the stored snapshot.
    ///
    /// Returns an empty list when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the snapshot cannot be read or
    /// decoded.
    async fn load(&self) -> SnapshotStoreResult<Vec<Project>>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// Reading or writing the snapshot failed.
    #[error("snapshot I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot format error: {0}")]
    Format(Arc<dyn std::error::Error + Send + Sync>),

    /// The snapshot carries a version this build cannot read.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    /// Any other persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Wraps an encoding or decoding error.
    pub fn format(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Format(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
