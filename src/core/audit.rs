//! Coverage audit: count tracked-prefix keys per language against a threshold.
//!
//! The audit never writes and never aborts on a bad file. Every roster entry
//! produces exactly one [`AuditEntry`], in roster order.

use tracing::debug;

use super::store::{LanguageFile, LocalizationStore, StoreError, StoreErrorKind};
use crate::config::{Language, TrackedPrefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixCount {
    pub prefix: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    Counted {
        counts: Vec<PrefixCount>,
        total: usize,
        status: Completeness,
    },
    Failed {
        kind: StoreErrorKind,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub language: Language,
    pub outcome: AuditOutcome,
}

impl AuditEntry {
    pub fn is_complete(&self) -> bool {
        matches!(
            self.outcome,
            AuditOutcome::Counted {
                status: Completeness::Complete,
                ..
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub entries: Vec<AuditEntry>,
    pub threshold: usize,
}

impl AuditReport {
    pub fn complete_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_complete()).count()
    }

    /// Incomplete and failed languages together.
    pub fn incomplete_count(&self) -> usize {
        self.entries.len() - self.complete_count()
    }

    pub fn roster_size(&self) -> usize {
        self.entries.len()
    }
}

/// Count keys under each prefix. A key matching several prefixes counts
/// under each of them.
pub fn count_prefixes<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    prefixes: &[TrackedPrefix],
) -> Vec<PrefixCount> {
    let mut counts: Vec<PrefixCount> = prefixes
        .iter()
        .map(|p| PrefixCount {
            prefix: p.prefix.clone(),
            label: p.label.clone(),
            count: 0,
        })
        .collect();

    for key in keys {
        for count in counts.iter_mut() {
            if key.starts_with(&count.prefix) {
                count.count += 1;
            }
        }
    }
    counts
}

pub fn classify(total: usize, threshold: usize) -> Completeness {
    if total >= threshold {
        Completeness::Complete
    } else {
        Completeness::Incomplete
    }
}

fn audit_file(file: &LanguageFile, prefixes: &[TrackedPrefix], threshold: usize) -> AuditOutcome {
    let counts = count_prefixes(file.keys(), prefixes);
    let total = counts.iter().map(|c| c.count).sum();
    AuditOutcome::Counted {
        counts,
        total,
        status: classify(total, threshold),
    }
}

fn failure(err: &StoreError) -> AuditOutcome {
    let message = match err {
        StoreError::MalformedJson { source, .. } => source.to_string(),
        StoreError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    };
    AuditOutcome::Failed {
        kind: err.kind(),
        message,
    }
}

pub fn audit(
    store: &LocalizationStore,
    roster: &[Language],
    prefixes: &[TrackedPrefix],
    threshold: usize,
) -> AuditReport {
    let entries = roster
        .iter()
        .map(|language| {
            let outcome = match store.load(&language.code) {
                Ok(file) => audit_file(&file, prefixes, threshold),
                Err(err) => {
                    debug!(code = %language.code, error = %err, "could not audit language");
                    failure(&err)
                }
            };
            debug!(code = %language.code, ?outcome, "audited language");
            AuditEntry {
                language: language.clone(),
                outcome,
            }
        })
        .collect();

    AuditReport { entries, threshold }
}
