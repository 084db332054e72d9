use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::super::{report::render_file_usage, run_log::RunLog};
use crate::core::RunContext;

/// Log what the scan and load phases ran into, then every file's findings.
pub fn log_scan(ctx: &RunContext, log: &mut RunLog) {
    log.info(format!(
        "Found {} {} to scan",
        ctx.scan.files.len(),
        if ctx.scan.files.len() == 1 { "file" } else { "files" }
    ));

    if ctx.scan.skipped_count > 0 {
        log.warn(format!(
            "{} path(s) skipped due to access errors{}",
            ctx.scan.skipped_count,
            if ctx.verbose { "" } else { " (use -v for details)" }
        ));
    }

    for failure in &ctx.catalogs.failures {
        log.warn(failure.to_string());
    }

    for err in &ctx.file_errors {
        log.error(format!(
            "Failed to process {}: {}",
            ctx.display_path(&err.path),
            err.source
        ));
    }

    for record in &ctx.records {
        render_file_usage(&ctx.display_path(&record.file), record, log);
    }
}

/// Write the log and tell the user where it went.
pub fn save_log(log: &RunLog, path: &Path) -> Result<()> {
    log.write_to(path)?;
    println!("{} {}", "Log saved to".dimmed(), path.display());
    Ok(())
}
