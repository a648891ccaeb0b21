//! Error types for Diary core operations.
//!
//! Every error kind maps to exactly one operation boundary; none of them
//! is expected to escape as a panic. The CLI layer maps these to
//! user-friendly messages.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Storage directory cannot be created or accessed
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A new entry could not be persisted
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// An existing entry could not be read
    #[error("Read failure: {0}")]
    ReadFailure(String),

    /// The backup archive could not be opened or written
    #[error("Archive failure: {0}")]
    ArchiveFailure(String),

    /// Caller supplied a selector outside the listed range
    #[error("Invalid selection: {selector} is not between 1 and {count}")]
    InvalidSelection { selector: usize, count: usize },

    /// The store holds no entries; an expected outcome, not an I/O fault
    #[error("No diary entries found")]
    NoEntries,
}

// No blanket From<io::Error>: the error kind depends on which operation
// the I/O happened in, so call sites map explicitly.
impl From<zip::result::ZipError> for DiaryError {
    fn from(err: zip::result::ZipError) -> Self {
        DiaryError::ArchiveFailure(err.to_string())
    }
}
