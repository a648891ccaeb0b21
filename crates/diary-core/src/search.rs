//! Case-insensitive keyword search across the stored entries.

use log::warn;

use crate::error::Result;
use crate::store::EntryStore;

/// Scan every entry for `keyword`, case-insensitive substring match.
///
/// One matching line is enough to report an entry; scanning that entry
/// stops there. Results carry the storage names in listing order. An entry
/// that cannot be read is skipped with a warning so one broken file never
/// aborts the whole search. No match is an empty vec, not an error.
pub fn search(store: &dyn EntryStore, keyword: &str) -> Result<Vec<String>> {
    let needle = keyword.to_lowercase();
    let mut matches = Vec::new();
    for entry in store.list_entries()? {
        match store.read_entry(&entry) {
            Ok(lines) => {
                if lines.iter().any(|line| line.to_lowercase().contains(&needle)) {
                    matches.push(entry.storage_name);
                }
            }
            Err(err) => {
                warn!("skipping unreadable entry {}: {}", entry.storage_name, err);
            }
        }
    }
    Ok(matches)
}
