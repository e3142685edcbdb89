use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_FILE_PREFIX;

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

/// Minimum tracked-key count for a language to count as complete.
pub const DEFAULT_THRESHOLD: usize = 91;

static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("language code pattern is valid")
});

/// A roster entry: language code plus a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// A key prefix counted by the audit, with the label shown in its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackedPrefix {
    pub prefix: String,
    pub label: String,
}

impl TrackedPrefix {
    pub fn new(prefix: &str, label: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_store_root")]
    pub store_root: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    #[serde(default = "default_tracked_prefixes")]
    pub tracked_prefixes: Vec<TrackedPrefix>,
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default = "default_master_locale")]
    pub master_locale: String,
    #[serde(default = "default_sync_exclude")]
    pub sync_exclude: Vec<String>,
}

fn default_store_root() -> String {
    "translations/ui_i18n".to_string()
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_seed_file() -> String {
    "translations/ui_additions.json".to_string()
}

fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

fn default_tracked_prefixes() -> Vec<TrackedPrefix> {
    vec![
        TrackedPrefix::new("BKY_WIFI_", "WiFi"),
        TrackedPrefix::new("BKY_WEBBLE_", "WebBLE"),
        TrackedPrefix::new("BKY_SERIAL_", "Serial"),
        TrackedPrefix::new("BKY_ESP32CAM_", "ESP32CAM"),
    ]
}

fn default_languages() -> Vec<Language> {
    [
        ("ja", "Japanese"),
        ("zh", "Chinese Simplified"),
        ("zh-tw", "Chinese Traditional"),
        ("ko", "Korean"),
        ("en", "English"),
        ("fr", "French"),
        ("de", "German"),
        ("es", "Spanish"),
        ("hi", "Hindi"),
        ("ru", "Russian"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ar", "Arabic"),
        ("th", "Thai"),
        ("vi", "Vietnamese"),
        ("id", "Indonesian"),
        ("fil", "Filipino"),
        ("tr", "Turkish"),
        ("pl", "Polish"),
        ("nl", "Dutch"),
        ("sv", "Swedish"),
        ("fa", "Persian"),
        ("uz", "Uzbek"),
    ]
    .into_iter()
    .map(|(code, name)| Language::new(code, name))
    .collect()
}

fn default_master_locale() -> String {
    "en".to_string()
}

// Korean is curated by hand and kept out of automatic sync.
fn default_sync_exclude() -> Vec<String> {
    vec!["ko".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: default_store_root(),
            file_prefix: default_file_prefix(),
            seed_file: default_seed_file(),
            threshold: default_threshold(),
            tracked_prefixes: default_tracked_prefixes(),
            languages: default_languages(),
            master_locale: default_master_locale(),
            sync_exclude: default_sync_exclude(),
        }
    }
}

pub fn is_valid_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

/// A file prefix is joined onto the store root, so it must stay a plain name.
pub fn validate_file_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        bail!("File prefix must not be empty");
    }
    if prefix.contains(['/', '\\']) || prefix.contains("..") {
        bail!("Invalid file prefix: \"{}\"", prefix);
    }
    Ok(())
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for malformed language codes, duplicate roster entries,
    /// or an empty roster / prefix list.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must list at least one language");
        }
        validate_file_prefix(&self.file_prefix).context("Invalid 'filePrefix'")?;

        let mut seen = HashSet::new();
        for language in &self.languages {
            if !is_valid_language_code(&language.code) {
                bail!("Invalid language code in 'languages': \"{}\"", language.code);
            }
            if !seen.insert(language.code.as_str()) {
                bail!("Duplicate language code in 'languages': \"{}\"", language.code);
            }
        }

        if self.tracked_prefixes.is_empty() {
            bail!("'trackedPrefixes' must list at least one prefix");
        }
        if let Some(empty) = self.tracked_prefixes.iter().find(|p| p.prefix.is_empty()) {
            bail!("Empty prefix in 'trackedPrefixes' (label \"{}\")", empty.label);
        }

        if !is_valid_language_code(&self.master_locale) {
            bail!("Invalid language code in 'masterLocale': \"{}\"", self.master_locale);
        }
        for code in &self.sync_exclude {
            if !is_valid_language_code(code) {
                bail!("Invalid language code in 'syncExclude': \"{}\"", code);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file that was loaded, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Resolve a configured path. Relative paths are anchored at the
    /// directory holding the config file, or `cwd` when using defaults.
    pub fn resolve(&self, configured: &str, cwd: &Path) -> PathBuf {
        let configured = Path::new(configured);
        if configured.is_absolute() {
            return configured.to_path_buf();
        }
        let base = self
            .path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd);
        base.join(configured)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
