//! ZIP backup of the entry directory.
//!
//! One record per entry, record name = storage name, payload = the verbatim
//! file bytes. Each record is finalized before the next begins, so a crash
//! mid-backup leaves a truncated but openable archive.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{DiaryError, Result};
use crate::store::EntryStore;

/// What a completed backup wrote and where.
#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    pub destination: PathBuf,
    pub entries_written: usize,
    pub entries_skipped: usize,
}

/// Bundle every stored entry into a compressed archive at `destination`.
///
/// A previous archive at the same path is truncated and replaced in full;
/// there are no incremental or merge semantics. An entry that cannot be
/// read is skipped with a warning, the rest still get archived.
///
/// # Errors
///
/// Returns `DiaryError::NoEntries` when the store is empty; the
/// destination is left untouched in that case. Returns
/// `DiaryError::ArchiveFailure` when the destination cannot be opened or
/// a record cannot be written.
pub fn build_backup(store: &dyn EntryStore, destination: &Path) -> Result<ArchiveSummary> {
    let entries = store.list_entries()?;
    if entries.is_empty() {
        return Err(DiaryError::NoEntries);
    }

    let file = File::create(destination).map_err(|err| {
        DiaryError::ArchiveFailure(format!("{}: {}", destination.display(), err))
    })?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries_written = 0;
    let mut entries_skipped = 0;
    for entry in &entries {
        // Read up front so an unreadable entry is skipped before its
        // record is opened in the archive.
        let bytes = match fs::read(&entry.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("skipping unreadable entry {}: {}", entry.storage_name, err);
                entries_skipped += 1;
                continue;
            }
        };
        writer.start_file(entry.storage_name.as_str(), options)?;
        writer.write_all(&bytes).map_err(|err| {
            DiaryError::ArchiveFailure(format!("writing {}: {}", entry.storage_name, err))
        })?;
        entries_written += 1;
    }
    writer.finish()?;

    Ok(ArchiveSummary {
        destination: destination.to_path_buf(),
        entries_written,
        entries_skipped,
    })
}
