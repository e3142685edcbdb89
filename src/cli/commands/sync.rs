use anyhow::{Context, Result, bail};

use super::super::args::SyncCommand;
use super::{CommandResult, CommandSummary, context::StoreContext};
use crate::config::is_valid_language_code;
use crate::core::{SyncMode, SyncOptions, sync_store};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = StoreContext::new(&cmd.common)?;
    let config = ctx.config();

    let master = cmd.master.as_deref().unwrap_or(config.master_locale.as_str());
    if !is_valid_language_code(master) {
        bail!("Invalid master language code: \"{}\"", master);
    }

    let summary = sync_store(
        &ctx.store,
        &SyncOptions {
            master,
            exclude: &config.sync_exclude,
            apply: cmd.apply,
            mode: if cmd.fill_only {
                SyncMode::FillMissing
            } else {
                SyncMode::Align
            },
            keys: &cmd.keys,
        },
    )
    .with_context(|| format!("Failed to sync against master \"{}\"", master))?;

    Ok(CommandResult::success(CommandSummary::Sync(summary)))
}
