//! Drives the built `diary` binary end to end against a temp directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diary"))
}

fn diary(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(bin());
    cmd.arg("--dir").arg(dir).args(args);
    // Keep the invocation hermetic: no user config, no inherited DIARY_DIR.
    cmd.env_remove("DIARY_DIR")
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}

fn run(cmd: &mut Command) -> Output {
    let output = cmd.output().expect("spawn diary");
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    output
}

fn write_entry(dir: &Path, body: &str) {
    let mut child = diary(dir, &["write"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn diary write");
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(body.as_bytes())
        .expect("feed entry body");
    let output = child.wait_with_output().expect("wait for diary write");
    assert!(output.status.success());
}

#[test]
fn test_write_list_read_search_backup_flow() {
    let temp = TempDir::new().expect("temp dir");
    let entries_dir = temp.path().join("entries");

    // Blank line ends the capture; the trailing note must not be stored.
    write_entry(
        &entries_dir,
        "Flew to Denver.\nTurbulence over the Rockies.\n\nignored after blank\n",
    );

    let list = run(&mut diary(&entries_dir, &["list"]));
    let listing = String::from_utf8_lossy(&list.stdout);
    assert!(listing.contains("1. diary_"), "listing was: {listing}");

    let read = run(&mut diary(&entries_dir, &["read", "1"]));
    let content = String::from_utf8_lossy(&read.stdout);
    assert!(content.contains("Flew to Denver."));
    assert!(content.contains("Turbulence over the Rockies."));
    assert!(!content.contains("ignored after blank"));

    let search = run(&mut diary(&entries_dir, &["search", "ROCKIES"]));
    let hits = String::from_utf8_lossy(&search.stdout);
    assert!(hits.contains("diary_"), "search output was: {hits}");

    let backup_path = temp.path().join("diary_backup.zip");
    let backup = run(&mut diary(
        &entries_dir,
        &["backup", backup_path.to_str().unwrap(), "--no-input"],
    ));
    let summary = String::from_utf8_lossy(&backup.stdout);
    assert!(summary.contains("Backup completed"), "backup output: {summary}");
    assert!(summary.contains("(1 entries)"));
    assert!(backup_path.is_file());
}

#[test]
fn test_read_out_of_range_selector_fails() {
    let temp = TempDir::new().expect("temp dir");
    let entries_dir = temp.path().join("entries");
    write_entry(&entries_dir, "only entry\n\n");

    let output = diary(&entries_dir, &["read", "2"])
        .output()
        .expect("spawn diary read");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid selection"), "stderr was: {stderr}");
}

#[test]
fn test_backup_of_empty_store_reports_nothing_to_do() {
    let temp = TempDir::new().expect("temp dir");
    let entries_dir = temp.path().join("entries");
    let backup_path = temp.path().join("diary_backup.zip");

    let output = run(&mut diary(
        &entries_dir,
        &["backup", backup_path.to_str().unwrap(), "--no-input"],
    ));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No entries to back up."));
    assert!(!backup_path.exists());
}

#[test]
fn test_search_miss_is_not_a_failure() {
    let temp = TempDir::new().expect("temp dir");
    let entries_dir = temp.path().join("entries");
    write_entry(&entries_dir, "calm seas\n\n");

    let output = run(&mut diary(&entries_dir, &["search", "volcano"]));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No entries found containing \"volcano\"."));
}
