//! In-memory snapshot store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::tracker::{
    domain::Project,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Thread-safe in-memory snapshot store.
///
/// Clones share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<Option<Vec<Project>>>>,
}

impl InMemorySnapshotStore {
    /// Creates a store with no saved snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `projects`.
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(projects))),
        }
    }

    /// Returns `true` once a snapshot has been saved or seeded.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the lock is poisoned.
    pub fn has_snapshot(&self) -> SnapshotStoreResult<bool> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.is_some())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, projects: &[Project]) -> SnapshotStoreResult<()> {
        let snapshot = projects.to_vec();
        let mut state = self.state.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = Some(snapshot);
        Ok(())
    }

    async fn load(&self) -> SnapshotStoreResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone().unwrap_or_default())
    }
}
