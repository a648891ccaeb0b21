//! Entry store trait and the directory-backed implementation.
//!
//! The `EntryStore` trait is the seam between the filesystem and everything
//! that consumes entries (search, archive, CLI); swapping in an indexed or
//! cached store later touches nothing but this module.

mod dir;
mod traits;

pub use dir::DirEntryStore;
pub use traits::{select, EntryStore};
