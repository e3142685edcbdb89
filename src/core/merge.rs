//! Overlay translation tables onto existing language files.

use tracing::debug;

use super::seed::{LanguageEntry, TranslationTable};
use super::store::{KeyAction, LocalizationStore, StoreError};

/// Outcome of merging one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMerge {
    pub code: String,
    /// Entries supplied for the language, whether inserted or overwritten.
    pub supplied: usize,
    pub inserted: usize,
    pub updated: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub languages: Vec<LanguageMerge>,
}

impl MergeSummary {
    pub fn total_supplied(&self) -> usize {
        self.languages.iter().map(|l| l.supplied).sum()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to merge translations for \"{code}\"")]
pub struct MergeError {
    pub code: String,
    #[source]
    pub source: StoreError,
}

/// Load the language file for `entry.code`, overwrite or insert every
/// supplied key, rewrite the file.
///
/// The file must already exist. Keys absent from `entry` are left untouched.
pub fn merge_language(
    store: &LocalizationStore,
    entry: &LanguageEntry,
) -> Result<LanguageMerge, StoreError> {
    let mut file = store.load(&entry.code)?;

    let mut inserted = 0;
    let mut updated = 0;
    for (key, text) in &entry.translations {
        match file.set(key, text) {
            KeyAction::Added => inserted += 1,
            KeyAction::Updated => updated += 1,
        }
    }
    file.save()?;

    debug!(
        code = %entry.code,
        inserted,
        updated,
        "merged translations"
    );

    Ok(LanguageMerge {
        code: entry.code.clone(),
        supplied: entry.len(),
        inserted,
        updated,
    })
}

/// Merge every language of `table` in order, stopping at the first failure.
///
/// `on_merged` is called after each language is written, so progress is
/// visible even when a later language aborts the run.
pub fn merge_table(
    store: &LocalizationStore,
    table: &TranslationTable,
    mut on_merged: impl FnMut(&LanguageMerge),
) -> Result<MergeSummary, MergeError> {
    let mut summary = MergeSummary::default();
    for entry in table.languages() {
        let merged = merge_language(store, entry).map_err(|source| MergeError {
            code: entry.code.clone(),
            source,
        })?;
        on_merged(&merged);
        summary.languages.push(merged);
    }
    Ok(summary)
}
