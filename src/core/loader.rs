//! Loading locale files into translation trees.

use std::fs;

use crate::core::{
    data::{KEY_SEPARATOR, LocaleFileDescriptor, LocaleFormat, TranslationTree},
    error::LoadFailure,
    parsers::{json::parse_json_str, yaml::parse_yaml_str},
};

/// Source of translation trees for the batch coordinator.
///
/// Implementations must normalize every key to a string so that key paths
/// from different languages and formats compare equal.
pub trait Loader {
    fn load(&self, descriptor: &LocaleFileDescriptor) -> Result<TranslationTree, LoadFailure>;
}

/// Loads locale files from the filesystem, dispatching on the descriptor's format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl Loader for FsLoader {
    fn load(&self, descriptor: &LocaleFileDescriptor) -> Result<TranslationTree, LoadFailure> {
        let path = descriptor.path();
        tracing::debug!(path, language = descriptor.language(), "Loading locale file");

        let content =
            fs::read_to_string(path).map_err(|e| LoadFailure::unreadable(path, e.to_string()))?;

        let parsed = match descriptor.format() {
            LocaleFormat::Json => parse_json_str(&content),
            LocaleFormat::Yaml => parse_yaml_str(&content, descriptor.language()),
        };

        let tree = parsed.map_err(|message| LoadFailure::malformed(path, message))?;

        if let Some(key_path) = tree.find_separator_key() {
            return Err(LoadFailure::malformed(
                path,
                format!(
                    "key '{}' at '{}' contains '{}', which separates key path segments",
                    key_path.segments().last().map(String::as_str).unwrap_or_default(),
                    key_path,
                    KEY_SEPARATOR
                ),
            ));
        }

        Ok(tree)
    }
}
