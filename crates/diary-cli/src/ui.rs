//! Minimal terminal output helpers.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Print an error to stderr, colored when stderr is a terminal.
pub fn print_error(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}

/// Print a dimmed hint line, skipped when stdout is not a terminal.
pub fn hint(message: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}", message.dimmed());
    }
}
