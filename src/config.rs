use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::FailurePolicy;

pub const CONFIG_FILE_NAME: &str = ".missingtextrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale_root")]
    pub locale_root: String,
    /// Regexes matched against file base names.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    #[serde(default)]
    pub skip_directories: Vec<String>,
    #[serde(default = "default_search_direct_locale")]
    pub search_direct_locale: bool,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_locale_root() -> String {
    "./config/locales".to_string()
}

fn default_search_direct_locale() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_root: default_locale_root(),
            skip_patterns: Vec::new(),
            skip_directories: Vec::new(),
            search_direct_locale: default_search_direct_locale(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any regex in `skipPatterns` is invalid.
    pub fn validate(&self) -> Result<()> {
        self.compiled_skip_patterns().map(|_| ())
    }

    pub fn compiled_skip_patterns(&self) -> Result<Vec<Regex>> {
        self.skip_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).with_context(|| {
                    format!("Invalid regex in 'skipPatterns': \"{}\"", pattern)
                })
            })
            .collect()
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
            tracing::debug!(path = %path.display(), "Loading config file");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
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
