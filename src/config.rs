//! Runtime configuration for snapshot persistence.

use camino::{Utf8Path, Utf8PathBuf};

/// Environment variable overriding [`TrackerConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";

/// Environment variable overriding [`TrackerConfig::snapshot_file`].
pub const SNAPSHOT_FILE_ENV: &str = "TASKBOARD_SNAPSHOT_FILE";

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "projects.json";

/// Configuration for where and how the project snapshot is stored.
///
/// # Examples
///
/// ```
/// use taskboard::config::TrackerConfig;
///
/// let config = TrackerConfig::default();
/// assert_eq!(config.snapshot_file, "projects.json");
///
/// let compact = TrackerConfig::new("/var/lib/taskboard").with_pretty(false);
/// assert!(!compact.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Directory holding the snapshot file.
    pub data_dir: Utf8PathBuf,
    /// File name of the snapshot inside [`TrackerConfig::data_dir`].
    pub snapshot_file: String,
    /// Whether snapshots are written as indented JSON.
    pub pretty: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from("."),
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_owned(),
            pretty: true,
        }
    }
}

impl TrackerConfig {
    /// Creates a configuration storing snapshots under `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Builds a configuration from the process environment, falling back
    /// to defaults for unset or blank variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(dir) = non_blank(DATA_DIR_ENV) {
            config.data_dir = Utf8PathBuf::from(dir);
        }
        if let Some(file) = non_blank(SNAPSHOT_FILE_ENV) {
            config.snapshot_file = file;
        }
        config
    }

    /// Sets the snapshot file name.
    #[must_use]
    pub fn with_snapshot_file(mut self, file: impl Into<String>) -> Self {
        self.snapshot_file = file.into();
        self
    }

    /// Sets whether snapshots are pretty-printed.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the full path of the snapshot file.
    #[must_use]
    pub fn snapshot_path(&self) -> Utf8PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }

    /// Returns the snapshot directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }
}
