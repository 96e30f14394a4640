use std::process::ExitCode;

use crate::core::ExtractSummary;

/// Process exit status of a command.
///
/// `Failure` means the command declined to act (`init` over an existing
/// config); `Error` means it failed (unreadable file, bad config, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running glot-extract commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn extracted(summary: ExtractSummary) -> Self {
        Self {
            summary: CommandSummary::Extract(summary),
            status: ExitStatus::Success,
        }
    }

    /// `init` refuses with [`ExitStatus::Failure`] when nothing was created.
    pub fn initialized(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            status: if created {
                ExitStatus::Success
            } else {
                ExitStatus::Failure
            },
        }
    }
}
