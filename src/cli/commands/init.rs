use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default config to the working directory, refusing to overwrite.
pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let summary = if config_path.exists() {
        InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        }
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "Created config file");
        InitSummary {
            created: true,
            error: None,
        }
    };

    Ok(finish(CommandSummary::Init(summary), Vec::new(), 0, 0, true))
}
