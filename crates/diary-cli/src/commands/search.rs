//! Search entries command handler.

use diary_core::search::search;
use diary_core::DirEntryStore;

use crate::cli::SearchArgs;

pub fn handle_search(store: &DirEntryStore, args: &SearchArgs, quiet: bool) -> anyhow::Result<()> {
    let matches = search(store, &args.keyword)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        if !quiet {
            println!("No entries found containing \"{}\".", args.keyword);
        }
        return Ok(());
    }

    for storage_name in &matches {
        println!("{storage_name}");
    }
    Ok(())
}
