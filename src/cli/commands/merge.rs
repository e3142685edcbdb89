use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::MergeCommand, report::print_language_merge};
use super::{CommandResult, CommandSummary, context::StoreContext};
use crate::core::{TranslationTable, merge_table};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = StoreContext::new(&cmd.common)?;
    let seed_path = ctx.resolve_path(cmd.seed.as_deref(), &ctx.config().seed_file);

    let table = TranslationTable::load(&seed_path)?;
    debug!(
        seed = %seed_path.display(),
        languages = table.languages().len(),
        entries = table.total_entries(),
        "loaded seed table"
    );

    let summary = merge_table(&ctx.store, &table, print_language_merge)
        .with_context(|| format!("Merge aborted (store: {})", ctx.store.root().display()))?;

    Ok(CommandResult::success(CommandSummary::Merge(summary)))
}
