//! Entry store trait definition.

use crate::entry::Entry;
use crate::error::{DiaryError, Result};

/// Repository interface over the stored entry set.
///
/// All implementations must ensure:
/// - Entries are write-once; no operation mutates an existing entry
/// - `list_entries` is authoritative on every call, so an entry created
///   by the previous operation is visible to the next listing
/// - An empty store lists as an empty vec, never as an error
pub trait EntryStore {
    /// Persist `lines` as a new entry named after the current local time.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::StorageUnavailable` if the storage directory
    /// cannot be created, `DiaryError::WriteFailure` on I/O error.
    fn create_entry(&self, lines: &[String]) -> Result<Entry>;

    /// Fresh snapshot of all `.txt` entries in the storage directory.
    ///
    /// The returned order is stable for the duration of the caller's
    /// current operation; 1-based selectors index into it via [`select`].
    fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Content lines of one entry.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::ReadFailure` if the entry file cannot be
    /// opened or is not valid UTF-8 text.
    fn read_entry(&self, entry: &Entry) -> Result<Vec<String>>;
}

/// Resolve a 1-based selector against a listing snapshot.
///
/// # Errors
///
/// Returns `DiaryError::InvalidSelection` when `selector` is outside
/// `[1, listing.len()]`.
pub fn select(listing: &[Entry], selector: usize) -> Result<&Entry> {
    if selector == 0 || selector > listing.len() {
        return Err(DiaryError::InvalidSelection {
            selector,
            count: listing.len(),
        });
    }
    Ok(&listing[selector - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn listing(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| {
                Entry::from_file_name(Path::new("entries"), &format!("diary_{i}.txt")).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_select_in_range() {
        let entries = listing(3);
        assert_eq!(select(&entries, 1).unwrap().storage_name, "diary_0.txt");
        assert_eq!(select(&entries, 3).unwrap().storage_name, "diary_2.txt");
    }

    #[test]
    fn test_select_boundaries_rejected() {
        let entries = listing(3);
        assert!(matches!(
            select(&entries, 0),
            Err(DiaryError::InvalidSelection { selector: 0, count: 3 })
        ));
        assert!(matches!(
            select(&entries, 4),
            Err(DiaryError::InvalidSelection { selector: 4, count: 3 })
        ));
    }

    #[test]
    fn test_select_empty_listing() {
        assert!(matches!(
            select(&[], 1),
            Err(DiaryError::InvalidSelection { selector: 1, count: 0 })
        ));
    }
}
