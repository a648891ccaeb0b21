//! List entries command handler.

use diary_core::{DirEntryStore, EntryStore};

use crate::cli::ListArgs;
use crate::ui::hint;

pub fn handle_list(store: &DirEntryStore, args: &ListArgs, quiet: bool) -> anyhow::Result<()> {
    let entries = store.list_entries()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            println!("No diary entries found.");
        }
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        println!("{}. {}", index + 1, entry.storage_name);
    }
    if !quiet {
        hint("diary read <number>");
    }
    Ok(())
}
