//! Diary CLI - a file-per-entry personal journal
//!
//! This is the command-line interface for Diary. It provides a thin,
//! user-friendly dispatch layer over the core library.

mod cli;
mod commands;
mod config;
mod ui;

use clap::Parser;
use diary_core::DirEntryStore;
use flexi_logger::{Logger, LoggerHandle};

use crate::cli::{Cli, Commands};
use crate::ui::print_error;

fn main() {
    // Core emits per-file skip warnings through `log`; route them to
    // stderr. A broken logger must not take the CLI down.
    let _logger = init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging() -> Option<LoggerHandle> {
    Logger::try_with_env_or_str("warn")
        .ok()?
        .log_to_stderr()
        .start()
        .ok()
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config::resolve(cli.dir.as_deref())?;
    let store = DirEntryStore::new(config.clone());

    match &cli.command {
        Commands::Write(args) => commands::write::handle_write(&store, args, cli.quiet),
        Commands::List(args) => commands::list::handle_list(&store, args, cli.quiet),
        Commands::Read(args) => commands::read::handle_read(&store, args),
        Commands::Search(args) => commands::search::handle_search(&store, args, cli.quiet),
        Commands::Backup(args) => commands::backup::handle_backup(&store, &config, args, cli.quiet),
    }
}
