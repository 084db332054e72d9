use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.transcheckrc.json` into the current directory.
pub fn init() -> Result<ExitStatus> {
    match write_default_config(Path::new("."))? {
        Some(_) => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
            println!(
                "{}",
                "Set messagesRoot and locales for your project, then run `transcheck check`."
                    .dimmed()
            );
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
            Ok(ExitStatus::Failure)
        }
    }
}

/// Returns the written path, or `None` when a config is already present.
fn write_default_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok(None);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(Some(config_path))
}
