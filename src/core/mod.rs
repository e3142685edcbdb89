//! Store access and the operations run against it.
//!
//! - `store`: one JSON dictionary per language under a root directory
//! - `seed`: translation tables fed to the merger
//! - `merge`: overlay a table onto existing dictionaries
//! - `audit`: per-language coverage of tracked key prefixes
//! - `sync`: align dictionaries with a master language

pub mod audit;
pub mod merge;
pub mod seed;
pub mod store;
pub mod sync;

pub use audit::{AuditEntry, AuditOutcome, AuditReport, Completeness, PrefixCount, audit};
pub use merge::{LanguageMerge, MergeError, MergeSummary, merge_language, merge_table};
pub use seed::{LanguageEntry, SeedError, TranslationTable};
pub use store::{
    DEFAULT_FILE_PREFIX, KeyAction, LanguageFile, LocalizationStore, StoreError, StoreErrorKind,
};
pub use sync::{FileSync, SkippedFile, SyncMode, SyncOptions, SyncSummary, sync_store};
