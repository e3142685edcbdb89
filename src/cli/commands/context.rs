use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{Config, ConfigLoadResult, load_config, validate_file_prefix};
use crate::core::LocalizationStore;

/// Configuration and store resolved for one command run.
pub struct StoreContext {
    pub store: LocalizationStore,
    loaded: ConfigLoadResult,
    cwd: PathBuf,
}

impl StoreContext {
    /// Load the config file (if any) and resolve the store root.
    ///
    /// `--store-root` / `LOCSYNC_STORE_ROOT` and `--file-prefix` /
    /// `LOCSYNC_FILE_PREFIX` win over the config file.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(common, cwd)
    }

    pub fn from_dir(common: &CommonArgs, cwd: PathBuf) -> Result<Self> {
        let loaded = load_config(&cwd)?;
        if let Some(path) = &loaded.path {
            debug!(path = %path.display(), "using config file");
        }

        let store_root = match &common.store_root {
            Some(root) => cwd.join(root),
            None => loaded.resolve(&loaded.config.store_root, &cwd),
        };
        let prefix = common
            .file_prefix
            .as_deref()
            .unwrap_or(loaded.config.file_prefix.as_str());
        validate_file_prefix(prefix)?;
        debug!(store_root = %store_root.display(), prefix, "resolved store");

        Ok(Self {
            store: LocalizationStore::with_prefix(store_root, prefix),
            loaded,
            cwd,
        })
    }

    pub fn config(&self) -> &Config {
        &self.loaded.config
    }

    /// A path given on the command line is taken relative to the current
    /// directory; otherwise the configured path is used.
    pub fn resolve_path(&self, cli: Option<&Path>, configured: &str) -> PathBuf {
        match cli {
            Some(path) => self.cwd.join(path),
            None => self.loaded.resolve(configured, &self.cwd),
        }
    }
}
