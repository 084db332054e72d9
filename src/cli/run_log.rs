//! Run log: every line a command reports, mirrored to the console and
//! written to a single file when the run ends.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

pub const ERROR_PREFIX: &str = "[ERROR] ";
pub const WARN_PREFIX: &str = "[WARN] ";

#[derive(Debug, Default)]
pub struct RunLog {
    lines: Vec<String>,
    /// Collect without printing (tests).
    quiet: bool,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            lines: Vec::new(),
            quiet: true,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.quiet {
            println!("{}", message);
        }
        self.lines.push(message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.quiet {
            eprintln!("{} {}", "warning:".bold().yellow(), message);
        }
        self.lines.push(format!("{}{}", WARN_PREFIX, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.quiet {
            eprintln!("{} {}", "error:".bold().red(), message);
        }
        self.lines.push(format!("{}{}", ERROR_PREFIX, message));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write all lines to `path`, creating its directory if needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(path, content)
            .with_context(|| format!("Failed to write log file: {}", path.display()))
    }
}
