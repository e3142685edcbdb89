//! Align language files with a master language file.
//!
//! In [`SyncMode::Align`] every target takes the master's key order. Keys
//! missing from a target are filled with the master text behind a `[TODO]`
//! marker, and keys the master does not have are dropped.
//!
//! [`SyncMode::FillMissing`] only appends master keys a target lacks, copying
//! the master text verbatim. Nothing is reordered, overwritten or removed.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::store::{LanguageFile, LocalizationStore, StoreError};

pub const TODO_MARKER: &str = "[TODO]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSync {
    pub code: String,
    pub file_name: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl FileSync {
    pub fn is_in_sync(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub master: String,
    pub master_file: String,
    pub master_key_count: usize,
    pub files: Vec<FileSync>,
    pub skipped: Vec<SkippedFile>,
    /// Requested keys the master does not have (fill mode only).
    pub unknown_keys: Vec<String>,
    pub is_apply: bool,
}

impl SyncSummary {
    pub fn total_added(&self) -> usize {
        self.files.iter().map(|f| f.added.len()).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.files.iter().map(|f| f.removed.len()).sum()
    }

    pub fn changed_files(&self) -> usize {
        self.files.iter().filter(|f| !f.is_in_sync()).count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
    #[default]
    Align,
    FillMissing,
}

#[derive(Debug, Clone)]
pub struct SyncOptions<'a> {
    pub master: &'a str,
    pub exclude: &'a [String],
    pub apply: bool,
    pub mode: SyncMode,
    /// Keys to fill in [`SyncMode::FillMissing`]. Empty means every master key.
    pub keys: &'a [String],
}

impl<'a> SyncOptions<'a> {
    pub fn align(master: &'a str, exclude: &'a [String], apply: bool) -> Self {
        Self {
            master,
            exclude,
            apply,
            mode: SyncMode::Align,
            keys: &[],
        }
    }
}

fn todo_text(master_value: &Value) -> Value {
    let text = match master_value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Value::String(format!("{} {}", TODO_MARKER, text))
}

/// Rebuild `target` in master key order. Returns the new entries together
/// with the keys that were added and removed.
pub fn align(
    master: &Map<String, Value>,
    target: &Map<String, Value>,
) -> (Map<String, Value>, Vec<String>, Vec<String>) {
    let mut aligned = Map::with_capacity(master.len());
    let mut added = Vec::new();

    for (key, master_value) in master {
        match target.get(key) {
            Some(existing) => {
                aligned.insert(key.clone(), existing.clone());
            }
            None => {
                aligned.insert(key.clone(), todo_text(master_value));
                added.push(key.clone());
            }
        }
    }

    let removed = target
        .keys()
        .filter(|key| !master.contains_key(*key))
        .cloned()
        .collect();

    (aligned, added, removed)
}

/// Append the master entries for `keys` that `target` lacks, in `keys` order.
/// Existing entries are never touched. Returns the new entries and the keys added.
pub fn fill_missing(
    master: &Map<String, Value>,
    target: &Map<String, Value>,
    keys: &[String],
) -> (Map<String, Value>, Vec<String>) {
    let mut filled = target.clone();
    let mut added = Vec::new();

    for key in keys {
        if filled.contains_key(key) {
            continue;
        }
        if let Some(master_value) = master.get(key) {
            filled.insert(key.clone(), master_value.clone());
            added.push(key.clone());
        }
    }

    (filled, added)
}

/// Sync every language file in the store against the master file.
///
/// The master must load; a target that fails to load is skipped and recorded.
pub fn sync_store(
    store: &LocalizationStore,
    options: &SyncOptions<'_>,
) -> Result<SyncSummary, StoreError> {
    let master = store.load(options.master)?;

    let mut unknown_keys = Vec::new();
    let fill_keys: Vec<String> = match options.mode {
        SyncMode::Align => Vec::new(),
        SyncMode::FillMissing if options.keys.is_empty() => {
            master.keys().map(str::to_string).collect()
        }
        SyncMode::FillMissing => {
            let (known, unknown): (Vec<String>, Vec<String>) = options
                .keys
                .iter()
                .cloned()
                .partition(|key| master.get(key).is_some());
            for key in &unknown {
                warn!(key = %key, master = %options.master, "key not found in master");
            }
            unknown_keys = unknown;
            known
        }
    };

    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for code in store.language_codes()? {
        if code == options.master || options.exclude.iter().any(|c| *c == code) {
            continue;
        }
        let path = store.file_path(&code);
        let file_name = store.file_name(&code);

        let target = match store.load(&code) {
            Ok(target) => target,
            Err(err) => {
                warn!(file = %file_name, error = %err, "skipping language file");
                skipped.push(SkippedFile {
                    file_name,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let (entries, added, removed) = match options.mode {
            SyncMode::Align => align(master.entries(), target.entries()),
            SyncMode::FillMissing => {
                let (filled, added) =
                    fill_missing(master.entries(), target.entries(), &fill_keys);
                (filled, added, Vec::new())
            }
        };
        // Align always rewrites so key order follows the master.
        let rewrite = options.mode == SyncMode::Align || !added.is_empty();
        if options.apply && rewrite {
            LanguageFile::from_entries(path, entries).save()?;
        }
        debug!(
            file = %file_name,
            added = added.len(),
            removed = removed.len(),
            apply = options.apply,
            "synced language file"
        );

        files.push(FileSync {
            code,
            file_name,
            added,
            removed,
        });
    }

    Ok(SyncSummary {
        master: options.master.to_string(),
        master_file: store.file_name(options.master),
        master_key_count: master.len(),
        files,
        skipped,
        unknown_keys,
        is_apply: options.apply,
    })
}
