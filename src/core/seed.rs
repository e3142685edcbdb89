//! Translation tables consumed by the merger.
//!
//! A seed file is a JSON object `{ "<code>": { "<key>": "<text>", ... }, ... }`.
//! Language and key order follow the file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

use crate::config::is_valid_language_code;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read seed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse seed file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed file {}: {message}", path.display())]
    Shape { path: PathBuf, message: String },
}

/// Translations supplied for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub translations: Vec<(String, String)>,
}

impl LanguageEntry {
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    languages: Vec<LanguageEntry>,
}

impl TranslationTable {
    pub fn new(languages: Vec<LanguageEntry>) -> Self {
        Self { languages }
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SeedError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SeedError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(value).map_err(|message| SeedError::Shape {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(root) = value else {
            return Err("root must be an object of language codes".to_string());
        };

        let mut languages = Vec::with_capacity(root.len());
        for (code, dict) in root {
            if !is_valid_language_code(&code) {
                return Err(format!("invalid language code \"{}\"", code));
            }
            let Value::Object(dict) = dict else {
                return Err(format!("translations for \"{}\" must be an object", code));
            };
            let mut translations = Vec::with_capacity(dict.len());
            for (key, text) in dict {
                match text {
                    Value::String(text) => translations.push((key, text)),
                    other => {
                        return Err(format!(
                            "value of \"{}\" in \"{}\" must be a string, found {}",
                            key,
                            code,
                            json_type_name(&other)
                        ));
                    }
                }
            }
            languages.push(LanguageEntry { code, translations });
        }
        Ok(Self { languages })
    }

    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Total number of (key, text) pairs across all languages.
    pub fn total_entries(&self) -> usize {
        self.languages.iter().map(LanguageEntry::len).sum()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
