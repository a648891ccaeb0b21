use clap::{Args, Parser, Subcommand};

use diary_core::VERSION;

/// Diary - a file-per-entry personal journal
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the entry files
    #[arg(short, long, global = true, env = "DIARY_DIR")]
    pub dir: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a new entry (reads lines from stdin until a blank line)
    Write(WriteArgs),

    /// List stored entries with their selection numbers
    List(ListArgs),

    /// Print one entry picked by its listing number
    Read(ReadArgs),

    /// Search all entries for a keyword
    Search(SearchArgs),

    /// Bundle every entry into a ZIP backup
    Backup(BackupArgs),
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    /// Entry body (bypasses stdin capture; newlines split into lines)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `read` command
#[derive(Args)]
pub struct ReadArgs {
    /// 1-based entry number from `diary list`
    #[arg(value_name = "NUMBER")]
    pub number: usize,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to look for (case-insensitive substring)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination archive path (defaults to the configured destination)
    #[arg(value_name = "PATH")]
    pub destination: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}
