//! Entry descriptors and the timestamp-derived naming convention.
//!
//! Every entry is one file named `diary_<YYYY_MM_DD_HH_MM_SS>.txt` inside
//! the storage directory. The timestamp is the entry's identity; a numeric
//! suffix is appended by the store when two entries land in the same second.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

/// File name prefix shared by all entries.
pub const ENTRY_PREFIX: &str = "diary_";

/// File name suffix the directory listing filters on.
pub const ENTRY_SUFFIX: &str = ".txt";

/// `chrono` format string for entry identifiers, second granularity.
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Descriptor for a single stored journal entry.
///
/// Entries are immutable after creation; this descriptor only points at
/// the file, it never caches content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Timestamp-derived identifier, e.g. `2024_03_01_09_15_30`
    pub identifier: String,

    /// File name inside the storage directory, e.g. `diary_2024_03_01_09_15_30.txt`
    pub storage_name: String,

    /// Full path of the entry file
    #[serde(skip)]
    pub path: PathBuf,
}

impl Entry {
    /// Build a descriptor for an existing file in the storage directory.
    ///
    /// Returns `None` when `file_name` does not carry the `.txt` suffix.
    /// Files without the `diary_` prefix are still listed (the directory is
    /// authoritative, not the naming convention); their identifier is the
    /// file stem as-is.
    pub fn from_file_name(storage_dir: &Path, file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(ENTRY_SUFFIX)?;
        let identifier = stem.strip_prefix(ENTRY_PREFIX).unwrap_or(stem);
        Some(Self {
            identifier: identifier.to_string(),
            storage_name: file_name.to_string(),
            path: storage_dir.join(file_name),
        })
    }
}

/// Format `timestamp` as an entry identifier.
pub fn identifier_for(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Storage file name for an identifier.
pub fn storage_name_for(identifier: &str) -> String {
    format!("{ENTRY_PREFIX}{identifier}{ENTRY_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap()
    }

    #[test]
    fn test_identifier_format() {
        assert_eq!(identifier_for(fixed_timestamp()), "2024_03_01_09_15_30");
    }

    #[test]
    fn test_storage_name_round_trip() {
        let name = storage_name_for("2024_03_01_09_15_30");
        assert_eq!(name, "diary_2024_03_01_09_15_30.txt");

        let entry = Entry::from_file_name(Path::new("entries"), &name).unwrap();
        assert_eq!(entry.identifier, "2024_03_01_09_15_30");
        assert_eq!(entry.storage_name, name);
        assert_eq!(entry.path, Path::new("entries").join(name));
    }

    #[test]
    fn test_from_file_name_rejects_non_txt() {
        assert!(Entry::from_file_name(Path::new("entries"), "notes.md").is_none());
    }

    #[test]
    fn test_from_file_name_accepts_foreign_txt() {
        let entry = Entry::from_file_name(Path::new("entries"), "scratch.txt").unwrap();
        assert_eq!(entry.identifier, "scratch");
        assert_eq!(entry.storage_name, "scratch.txt");
    }
}
