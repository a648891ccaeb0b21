//! # Diary Core
//!
//! Core library for Diary - a file-per-entry personal journal store.
//!
//! This crate provides the entry-storage and retrieval engine independent
//! of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: Entry descriptors and the timestamp-derived naming convention
//! - **store**: Entry store trait and the directory-backed implementation
//! - **search**: Case-insensitive keyword search across stored entries
//! - **archive**: ZIP backup of the entry directory
//! - **config**: Explicit storage/backup paths, no process-wide state
//! - **error**: Error taxonomy for all core operations

pub mod archive;
pub mod config;
pub mod entry;
pub mod error;
pub mod search;
pub mod store;

pub use config::DiaryConfig;
pub use entry::Entry;
pub use error::{DiaryError, Result};
pub use store::{DirEntryStore, EntryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
