use std::process::ExitCode;

/// Process exit status of a transcheck run.
///
/// - `Success` (0): catalogs are consistent (`check`) or minimal (`clean`)
/// - `Failure` (1): the report found something, or `init` found an existing config
/// - `Error` (2): the run could not complete (config error, unreadable source
///   root, no catalog loaded, log write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
