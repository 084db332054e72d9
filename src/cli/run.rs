use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, clean::clean, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(ExitStatus)` describing what the command found
/// - `Err` if the command could not run (config error, unreadable source root, ...)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
