use super::super::exit_status::ExitStatus;
use crate::core::{AuditReport, MergeSummary, SyncSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Audit(AuditReport),
    Sync(SyncSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a locsync command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
