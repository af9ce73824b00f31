use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::checks::SameCheck;
use crate::checks::same::DEFAULT_SOURCE_LANGUAGES;
use crate::format::FormatFlag;
use crate::unit::Flags;

pub const CONFIG_FILE_NAME: &str = ".samecheckrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_source_languages")]
    pub source_languages: Vec<String>,
    /// Flags applied to every unit, e.g. `python-format`.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Additional flags for individual message keys.
    #[serde(default)]
    pub key_flags: BTreeMap<String, Vec<String>>,
    /// Glob patterns of message keys that are never checked.
    #[serde(default)]
    pub ignore_keys: Vec<String>,
    /// Extra words that may stay untranslated.
    #[serde(default)]
    pub ignore_texts: Vec<String>,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_source_languages() -> Vec<String> {
    DEFAULT_SOURCE_LANGUAGES
        .iter()
        .map(|code| code.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            primary_locale: default_primary_locale(),
            source_languages: default_source_languages(),
            flags: Vec::new(),
            key_flags: BTreeMap::new(),
            ignore_keys: Vec::new(),
            ignore_texts: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignoreKeys` is invalid or a
    /// `*-format` flag in `flags` or `keyFlags` names no known syntax.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore_keys {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignoreKeys': \"{}\"", pattern))?;
        }

        let key_flags = self.key_flags.values().flatten();
        if let Some(flag) = self
            .flags
            .iter()
            .chain(key_flags)
            .find(|flag| FormatFlag::is_unknown_format(flag))
        {
            anyhow::bail!(
                "Unknown format flag \"{}\": expected one of python-format, php-format, c-format",
                flag
            );
        }

        if self.primary_locale.trim().is_empty() {
            anyhow::bail!("'primaryLocale' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignoreKeys` patterns. Invalid patterns are skipped; call
    /// [`Config::validate`] first to reject them.
    pub fn ignore_key_patterns(&self) -> Vec<Pattern> {
        self.ignore_keys
            .iter()
            .filter_map(|pattern| Pattern::new(pattern).ok())
            .collect()
    }

    /// Flags for a message key: the global flags plus its `keyFlags` entry.
    pub fn flags_for_key(&self, key: &str) -> Flags {
        let mut flags: Flags = self.flags.iter().map(String::as_str).collect();
        if let Some(extra) = self.key_flags.get(key) {
            flags.extend(extra.iter().map(String::as_str));
        }
        flags
    }

    /// The same check configured from this file.
    pub fn same_check(&self) -> SameCheck {
        SameCheck::new()
            .with_source_languages(self.source_languages.iter().cloned())
            .with_extra_words(&self.ignore_texts)
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            log::debug!("loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
