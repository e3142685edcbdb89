//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Overlay a seed translation table onto the language files
//! - `audit`: Report tracked-key coverage for every roster language
//! - `sync`: Align language files with the master language (dry-run by default),
//!   or with `--fill-only` just copy missing master keys
//! - `init`: Write a default `.locsyncrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

pub const STORE_ROOT_ENV: &str = "LOCSYNC_STORE_ROOT";
pub const FILE_PREFIX_ENV: &str = "LOCSYNC_FILE_PREFIX";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Audit(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all store commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding the <prefix><code>.json files (overrides config file)
    #[arg(long, env = STORE_ROOT_ENV)]
    pub store_root: Option<PathBuf>,

    /// Language file name prefix, e.g. `blockly_` (overrides config file)
    #[arg(long, env = FILE_PREFIX_ENV)]
    pub file_prefix: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Seed file with translations per language (overrides config file)
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Master language code (overrides config file)
    #[arg(long)]
    pub master: Option<String>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Only add master keys a file lacks; never reorder, overwrite or remove
    #[arg(long)]
    pub fill_only: bool,

    /// Key to fill (repeatable; default is every master key)
    #[arg(long = "key", value_name = "KEY", requires = "fill_only")]
    pub keys: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add the seed translations to each language file, overwriting same-named keys
    Merge(MergeCommand),
    /// Report per-language coverage of the tracked key prefixes
    Audit(AuditCommand),
    /// Sync language files with the master language: add [TODO] keys, drop extra keys
    Sync(SyncCommand),
    /// Initialize a new .locsyncrc.json configuration file
    Init,
}
