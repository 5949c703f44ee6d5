use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        batch::{BatchCoordinator, FailurePolicy},
        discovery::{DiscoveryOptions, LocaleDirectory, discover_locale_directories},
        loader::FsLoader,
    },
};

/// Settings of one `check` run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locale-root locales`, `--strict`)
/// 2. `.missingtextrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    pub discovery: DiscoveryOptions,
    pub verbose: bool,
}

impl CheckContext {
    /// Load the config file found from the working directory and apply
    /// `common_args` on top.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read or parsed, or if a
    /// skip pattern is not a valid regex.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the working directory")?;
        let config_result = load_config(&cwd)?;

        if !config_result.from_file {
            tracing::debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
        }

        Self::from_config(config_result.config, common_args)
    }

    pub fn from_config(mut config: Config, common_args: &CommonArgs) -> Result<Self> {
        if let Some(ref locale_root) = common_args.locale_root {
            config.locale_root = locale_root.to_string_lossy().to_string();
        }

        if common_args.strict {
            config.failure_policy = FailurePolicy::Strict;
        }

        let discovery = DiscoveryOptions {
            skip_patterns: config.compiled_skip_patterns()?,
            skip_directories: config.skip_directories.clone(),
            search_direct_locale: config.search_direct_locale,
        };

        Ok(Self {
            config,
            discovery,
            verbose: common_args.verbose,
        })
    }

    pub fn locale_root(&self) -> PathBuf {
        PathBuf::from(&self.config.locale_root)
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.failure_policy
    }

    pub fn coordinator(&self) -> BatchCoordinator<FsLoader> {
        BatchCoordinator::new(FsLoader, self.failure_policy())
    }

    /// Discover the locale directories under the configured root.
    pub fn locale_directories(&self) -> Result<Vec<LocaleDirectory>> {
        discover_locale_directories(Path::new(&self.config.locale_root), &self.discovery)
    }
}
