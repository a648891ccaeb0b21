//! Backup command handler.

use std::io::IsTerminal;
use std::path::PathBuf;

use diary_core::archive::build_backup;
use diary_core::{DiaryConfig, DiaryError, DirEntryStore};

use crate::cli::BackupArgs;

pub fn handle_backup(
    store: &DirEntryStore,
    config: &DiaryConfig,
    args: &BackupArgs,
    quiet: bool,
) -> anyhow::Result<()> {
    let destination = args
        .destination
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.archive_destination.clone());

    // A backup replaces the previous archive in full; confirm the
    // overwrite when someone is at the keyboard.
    if destination.exists() && !args.no_input && std::io::stdin().is_terminal() && !quiet {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!("Overwrite existing backup at {}?", destination.display()))
            .default(true)
            .interact()?;
        if !proceed {
            return Err(anyhow::anyhow!("Backup cancelled"));
        }
    }

    match build_backup(store, &destination) {
        Ok(summary) => {
            if !quiet {
                println!(
                    "Backup completed: {} ({} entries)",
                    summary.destination.display(),
                    summary.entries_written
                );
                if summary.entries_skipped > 0 {
                    println!("Skipped {} unreadable entries.", summary.entries_skipped);
                }
            }
            Ok(())
        }
        // An empty store is "nothing to do", not a failure.
        Err(DiaryError::NoEntries) => {
            if !quiet {
                println!("No entries to back up.");
            }
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
