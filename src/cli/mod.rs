//! Command-line interface layer.
//!
//! Parses arguments, builds a [`RunContext`](crate::core::RunContext), runs a
//! rule, renders its report into the run log and maps the outcome to an
//! [`ExitStatus`].

use std::process::ExitCode;

use anyhow::Result;

pub mod actions;
pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;
pub mod run_log;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    run::run(args).map(ExitCode::from)
}
