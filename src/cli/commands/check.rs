use anyhow::Result;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{render_usage_summary, render_validation},
    run_log::RunLog,
};
use super::helper::{log_scan, save_log};
use crate::{core::RunContext, rules::validation::build_validation_report};

pub const CHECK_LOG_FILE: &str = "check.log";

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;
    let mut log = RunLog::new();

    log.info("Checking translations...");
    log_scan(&ctx, &mut log);

    log.info("");
    log.info("Checking catalog keys...");
    render_usage_summary(&ctx.usage, &mut log);

    let report = build_validation_report(&ctx.usage, &ctx.catalogs.catalogs);
    render_validation(&report, &mut log);

    save_log(&log, &ctx.log_dir.join(CHECK_LOG_FILE))?;

    Ok(if report.has_issues() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
