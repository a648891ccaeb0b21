//! Directory-backed entry store.
//!
//! One file per entry, named by creation timestamp. The directory itself is
//! the database: listing re-scans it on every call, which keeps a freshly
//! written entry visible to the next listing at the cost of an O(n) scan.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};

use chrono::{Local, NaiveDateTime};

use crate::config::DiaryConfig;
use crate::entry::{identifier_for, storage_name_for, Entry, ENTRY_SUFFIX};
use crate::error::{DiaryError, Result};
use crate::store::EntryStore;

/// Filesystem-backed entry store rooted at `config.storage_dir`.
pub struct DirEntryStore {
    config: DiaryConfig,
}

impl DirEntryStore {
    pub fn new(config: DiaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiaryConfig {
        &self.config
    }

    /// Create the storage directory if absent; no-op if present.
    ///
    /// Called internally before every operation that touches the directory,
    /// so callers never need to sequence it themselves.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::StorageUnavailable` when the directory cannot
    /// be created, e.g. permission denied or the path occupied by a file.
    pub fn ensure_storage_ready(&self) -> Result<()> {
        let dir = &self.config.storage_dir;
        fs::create_dir_all(dir)
            .map_err(|err| DiaryError::StorageUnavailable(format!("{}: {}", dir.display(), err)))?;
        if !dir.is_dir() {
            return Err(DiaryError::StorageUnavailable(format!(
                "{} exists but is not a directory",
                dir.display()
            )));
        }
        Ok(())
    }

    /// Persist `lines` as a new entry stamped with `timestamp`.
    ///
    /// Exposed so callers with their own clock (tests, imports) can pin the
    /// identifier; `create_entry` feeds it the current local time.
    ///
    /// The file is opened with `create_new`, so an entry is never silently
    /// overwritten: when the second-granularity name is already taken, a
    /// monotonic counter suffix (`_2`, `_3`, ...) is appended until the
    /// name is free.
    pub fn create_entry_at(&self, lines: &[String], timestamp: NaiveDateTime) -> Result<Entry> {
        self.ensure_storage_ready()?;
        let base = identifier_for(timestamp);
        let mut identifier = base.clone();
        let mut attempt: u32 = 1;
        loop {
            let storage_name = storage_name_for(&identifier);
            let path = self.config.storage_dir.join(&storage_name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    write_lines(file, lines)
                        .map_err(|err| write_failure(&storage_name, &err))?;
                    return Ok(Entry {
                        identifier,
                        storage_name,
                        path,
                    });
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    attempt += 1;
                    identifier = format!("{base}_{attempt}");
                }
                Err(err) => return Err(write_failure(&storage_name, &err)),
            }
        }
    }
}

impl EntryStore for DirEntryStore {
    fn create_entry(&self, lines: &[String]) -> Result<Entry> {
        self.create_entry_at(lines, Local::now().naive_local())
    }

    fn list_entries(&self) -> Result<Vec<Entry>> {
        self.ensure_storage_ready()?;
        let dir = &self.config.storage_dir;
        let reader = fs::read_dir(dir)
            .map_err(|err| DiaryError::StorageUnavailable(format!("{}: {}", dir.display(), err)))?;

        let mut entries = Vec::new();
        for item in reader {
            let item = item.map_err(|err| {
                DiaryError::StorageUnavailable(format!("{}: {}", dir.display(), err))
            })?;
            // Non-UTF-8 names cannot match the naming convention; skip them.
            let Some(name) = item.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !name.ends_with(ENTRY_SUFFIX) {
                continue;
            }
            if let Some(entry) = Entry::from_file_name(dir, &name) {
                entries.push(entry);
            }
        }
        // Timestamp-derived names sort chronologically, which also makes
        // 1-based selectors reproducible across listings.
        entries.sort_by(|a, b| a.storage_name.cmp(&b.storage_name));
        Ok(entries)
    }

    fn read_entry(&self, entry: &Entry) -> Result<Vec<String>> {
        let file = fs::File::open(&entry.path)
            .map_err(|err| read_failure(&entry.storage_name, &err))?;
        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(|err| read_failure(&entry.storage_name, &err))
    }
}

fn write_lines(file: fs::File, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

fn write_failure(storage_name: &str, err: &io::Error) -> DiaryError {
    DiaryError::WriteFailure(format!("{storage_name}: {err}"))
}

fn read_failure(storage_name: &str, err: &io::Error) -> DiaryError {
    DiaryError::ReadFailure(format!("{storage_name}: {err}"))
}
