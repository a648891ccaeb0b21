//! Read entry command handler.

use diary_core::store::select;
use diary_core::{DirEntryStore, EntryStore};

use crate::cli::ReadArgs;

pub fn handle_read(store: &DirEntryStore, args: &ReadArgs) -> anyhow::Result<()> {
    // The selector indexes this listing, taken fresh for this invocation.
    let listing = store.list_entries()?;
    if listing.is_empty() {
        println!("No diary entries found.");
        return Ok(());
    }

    let entry = select(&listing, args.number)?;
    for line in store.read_entry(entry)? {
        println!("{line}");
    }
    Ok(())
}
