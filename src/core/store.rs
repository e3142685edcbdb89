//! On-disk localization store: one `<prefix><code>.json` file per language.
//!
//! The prefix defaults to `ui_`; the Blockly core dictionaries use `blockly_`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

pub const DEFAULT_FILE_PREFIX: &str = "ui_";
pub const FILE_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to parse JSON: {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Root of JSON file must be an object: {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification used when reporting a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    MissingFile,
    MalformedJson,
    Io,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::MissingFile { .. } => StoreErrorKind::MissingFile,
            StoreError::MalformedJson { .. } | StoreError::NotAnObject { .. } => {
                StoreErrorKind::MalformedJson
            }
            StoreError::Io { .. } => StoreErrorKind::Io,
        }
    }
}

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

/// A directory holding one JSON dictionary per language.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    root: PathBuf,
    prefix: String,
}

impl LocalizationStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_prefix(root, DEFAULT_FILE_PREFIX)
    }

    pub fn with_prefix(root: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// File name of the dictionary for `code`, e.g. `ui_zh-tw.json`.
    pub fn file_name(&self, code: &str) -> String {
        format!("{}{}.{}", self.prefix, code, FILE_EXTENSION)
    }

    /// Path of the dictionary for `code`, e.g. `<root>/ui_zh-tw.json`.
    pub fn file_path(&self, code: &str) -> PathBuf {
        self.root.join(self.file_name(code))
    }

    pub fn load(&self, code: &str) -> Result<LanguageFile, StoreError> {
        LanguageFile::open(&self.file_path(code))
    }

    /// Language codes that have a dictionary in the store root, sorted by file name.
    pub fn language_codes(&self) -> Result<Vec<String>, StoreError> {
        let mut codes = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                match err.into_io_error() {
                    Some(source) if source.kind() == io::ErrorKind::NotFound => {
                        StoreError::MissingFile { path }
                    }
                    Some(source) => StoreError::Io { path, source },
                    None => StoreError::Io {
                        path,
                        source: io::Error::other("filesystem loop"),
                    },
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(code) =
                code_from_file_name(&entry.file_name().to_string_lossy(), &self.prefix)
            {
                codes.push(code.to_string());
            }
        }
        Ok(codes)
    }
}

/// Extract the language code from a `<prefix><code>.json` file name.
pub fn code_from_file_name<'a>(file_name: &'a str, prefix: &str) -> Option<&'a str> {
    let code = file_name
        .strip_prefix(prefix)?
        .strip_suffix(FILE_EXTENSION)?
        .strip_suffix('.')?;
    (!code.is_empty()).then_some(code)
}

/// An in-memory copy of one language dictionary, keys kept in file order.
#[derive(Debug, Clone)]
pub struct LanguageFile {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl LanguageFile {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| StoreError::MalformedJson {
                path: path.to_path_buf(),
                source,
            })?;
        let Value::Object(entries) = value else {
            return Err(StoreError::NotAnObject {
                path: path.to_path_buf(),
            });
        };
        debug!(path = %path.display(), keys = entries.len(), "loaded language file");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub(crate) fn from_entries(path: PathBuf, entries: Map<String, Value>) -> Self {
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert or overwrite `key`. An existing key keeps its position.
    pub fn set(&mut self, key: &str, text: &str) -> KeyAction {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = Value::String(text.to_string());
                KeyAction::Updated
            }
            None => {
                self.entries
                    .insert(key.to_string(), Value::String(text.to_string()));
                KeyAction::Added
            }
        }
    }

    /// Serialize with 2-space indentation and a trailing newline.
    ///
    /// Non-ASCII text is written as-is, never `\u` escaped.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        Ok(format!("{}\n", content))
    }

    /// Rewrite the whole file.
    pub fn save(&self) -> Result<(), StoreError> {
        let content = self
            .to_json_string()
            .map_err(|source| StoreError::MalformedJson {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), keys = self.entries.len(), "wrote language file");
        Ok(())
    }
}
