use serde::Serialize;

use super::key_path::KeyPath;

/// One missing translation: a base-language string and every language lacking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingEntryRecord {
    /// Language that has the entry (e.g., "en").
    pub base_language: String,
    /// The value found at `key_path` in the base language.
    pub base_string: String,
    /// Languages missing the entry, in batch order.
    pub target_languages: Vec<String>,
    /// Dotted rendering of `key_path` (e.g., "obj3.obj32").
    pub locale_code: String,
    #[serde(skip)]
    pub key_path: KeyPath,
}

impl MissingEntryRecord {
    pub fn new(
        base_language: impl Into<String>,
        base_string: impl Into<String>,
        target_languages: Vec<String>,
        key_path: KeyPath,
    ) -> Self {
        Self {
            base_language: base_language.into(),
            base_string: base_string.into(),
            target_languages,
            locale_code: key_path.locale_code(),
            key_path,
        }
    }
}
