//! JSON file snapshot store.
//!
//! The snapshot is a single JSON document wrapped in a versioned envelope.
//! Saves write a sibling temporary file and rename it over the target so a
//! reader sees either the old or the new snapshot in full.

use async_trait::async_trait;
use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, warn};

use crate::config::TrackerConfig;
use crate::tracker::{
    domain::Project,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Envelope version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotEnvelopeRef<'a> {
    version: u32,
    projects: &'a [Project],
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotEnvelope {
    projects: Vec<Project>,
}

/// Snapshot store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    data_dir: Utf8PathBuf,
    file_name: String,
    pretty: bool,
}

impl JsonFileSnapshotStore {
    /// Creates a store writing to the location described by `config`.
    #[must_use]
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            file_name: config.snapshot_file.clone(),
            pretty: config.pretty,
        }
    }

    /// Returns the full path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> Utf8PathBuf {
        self.data_dir.join(&self.file_name)
    }

    fn temp_file_name(&self) -> String {
        format!("{}.tmp", self.file_name)
    }

    fn encode(&self, projects: &[Project]) -> SnapshotStoreResult<Vec<u8>> {
        let envelope = SnapshotEnvelopeRef {
            version: SNAPSHOT_VERSION,
            projects,
        };
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&envelope)
        } else {
            serde_json::to_vec(&envelope)
        };
        encoded.map_err(SnapshotStoreError::format)
    }

    async fn run_blocking<F, T>(&self, f: F) -> SnapshotStoreResult<T>
    where
        F: FnOnce(Utf8PathBuf, String) -> SnapshotStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let data_dir = self.data_dir.clone();
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || f(data_dir, file_name))
            .await
            .map_err(SnapshotStoreError::persistence)?
    }
}

fn decode(bytes: &[u8]) -> SnapshotStoreResult<Vec<Project>> {
    let header: SnapshotHeader = serde_json::from_slice(bytes).map_err(SnapshotStoreError::format)?;
    if header.version != SNAPSHOT_VERSION {
        return Err(SnapshotStoreError::UnsupportedVersion(header.version));
    }
    let envelope: SnapshotEnvelope =
        serde_json::from_slice(bytes).map_err(SnapshotStoreError::format)?;
    Ok(envelope.projects)
}

fn write_atomically(dir: &Dir, file_name: &str, temp_name: &str, bytes: &[u8]) -> io::Result<()> {
    dir.write(temp_name, bytes)?;
    if let Err(err) = dir.rename(temp_name, dir, file_name) {
        if let Err(cleanup_err) = dir.remove_file(temp_name) {
            warn!(file = temp_name, error = %cleanup_err, "failed to remove temporary snapshot");
        }
        return Err(err);
    }
    Ok(())
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn save(&self, projects: &[Project]) -> SnapshotStoreResult<()> {
        let bytes = self.encode(projects)?;
        let temp_name = self.temp_file_name();
        let project_count = projects.len();

        self.run_blocking(move |data_dir, file_name| {
            let dir = Dir::create_ambient_dir_all(&data_dir, ambient_authority())
                .and_then(|()| Dir::open_ambient_dir(&data_dir, ambient_authority()))
                .map_err(SnapshotStoreError::io)?;
            write_atomically(&dir, &file_name, &temp_name, &bytes)
                .map_err(SnapshotStoreError::io)?;
            debug!(
                dir = %data_dir,
                file = %file_name,
                projects = project_count,
                bytes = bytes.len(),
                "saved project snapshot"
            );
            Ok(())
        })
        .await
    }

    async fn load(&self) -> SnapshotStoreResult<Vec<Project>> {
        let bytes = self
            .run_blocking(|data_dir, file_name| {
                let dir = match Dir::open_ambient_dir(&data_dir, ambient_authority()) {
                    Ok(dir) => dir,
                    Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
                    Err(err) => return Err(SnapshotStoreError::io(err)),
                };
                match dir.read(&file_name) {
                    Ok(bytes) => Ok(Some(bytes)),
                    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                    Err(err) => Err(SnapshotStoreError::io(err)),
                }
            })
            .await?;

        let Some(contents) = bytes else {
            debug!(path = %self.path(), "no snapshot found, starting empty");
            return Ok(Vec::new());
        };
        let projects = decode(&contents)?;
        debug!(path = %self.path(), projects = projects.len(), "loaded project snapshot");
        Ok(projects)
    }
}
