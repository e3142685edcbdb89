use std::process::ExitCode;

/// Process exit status for locsync commands.
///
/// - `Success` (0): command finished; an audit with incomplete languages still succeeds
/// - `Failure` (1): command refused to act (e.g. `init` with an existing config)
/// - `Error` (2): command aborted (missing store file, bad seed, bad config)
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
