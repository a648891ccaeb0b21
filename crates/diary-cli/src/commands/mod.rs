//! Command handlers, one module per subcommand.

pub mod backup;
pub mod list;
pub mod read;
pub mod search;
pub mod write;
