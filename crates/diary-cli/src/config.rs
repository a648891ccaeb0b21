//! CLI-side configuration resolution.
//!
//! Precedence: `--dir` flag (or `DIARY_DIR` env, handled by clap) over
//! `config.toml` over the built-in defaults (`entries/`,
//! `diary_backup.zip` in the working directory).

use std::path::PathBuf;

use serde::Deserialize;

use diary_core::config::{DEFAULT_ARCHIVE_FILE, DEFAULT_STORAGE_DIR};
use diary_core::DiaryConfig;

/// Optional overrides read from `config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub storage_dir: Option<PathBuf>,
    pub archive_destination: Option<PathBuf>,
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(xdg_config_dir()?.join("config.toml"))
}

fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("diary"));
        }
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config").join("diary"))
}

fn load_file_config() -> anyhow::Result<FileConfig> {
    let Some(path) = default_config_path() else {
        return Ok(FileConfig::default());
    };
    if !path.is_file() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("invalid config at {}: {}", path.display(), err))
}

/// Resolve the effective paths for this invocation.
pub fn resolve(cli_dir: Option<&str>) -> anyhow::Result<DiaryConfig> {
    let file = load_file_config()?;

    let storage_dir = match cli_dir {
        Some(dir) => PathBuf::from(dir),
        None => file
            .storage_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
    };
    let archive_destination = file
        .archive_destination
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_FILE));

    Ok(DiaryConfig::new(storage_dir, archive_destination))
}
