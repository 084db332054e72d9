use anyhow::Result;

use super::super::{
    actions::prune_unused,
    args::CleanCommand,
    exit_status::ExitStatus,
    report::{render_prune, render_unused, render_usage_summary},
    run_log::RunLog,
};
use super::helper::{log_scan, save_log};
use crate::{core::RunContext, rules::unused::build_unused_report};

pub const CLEAN_LOG_FILE: &str = "clean.log";
pub const REMOVE_LOG_FILE: &str = "remove.log";

/// Report unused catalog entries; delete them when `--remove` is given.
///
/// The exit status reflects whether the catalogs were minimal when the run
/// started, so a removing run that deleted something still exits 1.
pub fn clean(cmd: CleanCommand) -> Result<ExitStatus> {
    let mut ctx = RunContext::new(&cmd.common)?;
    let remove = cmd.remove;
    let mut log = RunLog::new();

    log.info("Checking for unused translation keys...");
    log_scan(&ctx, &mut log);

    log.info("");
    render_usage_summary(&ctx.usage, &mut log);

    let report = build_unused_report(&ctx.usage, &ctx.catalogs.catalogs);
    let outcomes = prune_unused(&report, &mut ctx.catalogs, !remove);

    render_prune(&report, &outcomes, remove, &mut log);
    render_unused(&report, &outcomes, remove, &mut log);

    let log_file = if remove { REMOVE_LOG_FILE } else { CLEAN_LOG_FILE };
    save_log(&log, &ctx.log_dir.join(log_file))?;

    Ok(if report.has_unused() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
