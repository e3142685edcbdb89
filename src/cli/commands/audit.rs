use anyhow::Result;

use super::super::args::AuditCommand;
use super::{CommandResult, CommandSummary, context::StoreContext};
use crate::core::audit;

/// Audit every roster language. Per-language failures end up in the report,
/// so this only fails when the configuration itself cannot be loaded.
pub fn audit_command(cmd: AuditCommand) -> Result<CommandResult> {
    let ctx = StoreContext::new(&cmd.common)?;
    let config = ctx.config();

    let report = audit(
        &ctx.store,
        &config.languages,
        &config.tracked_prefixes,
        config.threshold,
    );

    Ok(CommandResult::success(CommandSummary::Audit(report)))
}
