//! Write entry command handler.

use std::io::{self, BufRead, IsTerminal};

use diary_core::{DirEntryStore, EntryStore};

use crate::cli::WriteArgs;

pub fn handle_write(store: &DirEntryStore, args: &WriteArgs, quiet: bool) -> anyhow::Result<()> {
    let lines = match &args.body {
        Some(body) => body.lines().map(str::to_string).collect(),
        None => capture_lines()?,
    };

    let entry = store.create_entry(&lines)?;
    if !quiet {
        println!("Entry saved as {}", entry.path.display());
    }
    Ok(())
}

/// Read entry lines from stdin. The first blank line ends the capture and
/// is not part of the entry.
fn capture_lines() -> anyhow::Result<Vec<String>> {
    if io::stdin().is_terminal() {
        println!("Type your entry (empty line to finish):");
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}
