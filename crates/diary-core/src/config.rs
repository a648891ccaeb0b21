//! Explicit configuration for the entry store and archive builder.
//!
//! The store and the archive builder take their paths from this struct
//! instead of fixed constants, so tests can redirect both without
//! touching global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default name of the directory holding the entry files.
pub const DEFAULT_STORAGE_DIR: &str = "entries";

/// Default name of the backup archive.
pub const DEFAULT_ARCHIVE_FILE: &str = "diary_backup.zip";

/// Paths the diary operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryConfig {
    /// Directory holding one `.txt` file per entry
    pub storage_dir: PathBuf,

    /// Destination of the backup archive
    pub archive_destination: PathBuf,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            archive_destination: PathBuf::from(DEFAULT_ARCHIVE_FILE),
        }
    }
}

impl DiaryConfig {
    pub fn new(storage_dir: impl Into<PathBuf>, archive_destination: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            archive_destination: archive_destination.into(),
        }
    }

    /// Both paths placed under `root`, keeping the default names.
    pub fn under(root: &Path) -> Self {
        Self {
            storage_dir: root.join(DEFAULT_STORAGE_DIR),
            archive_destination: root.join(DEFAULT_ARCHIVE_FILE),
        }
    }
}
