use std::{fmt, path::Path};

use serde::Serialize;

use crate::core::error::UnsupportedFormat;

/// On-disk format of a locale file, determined by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleFormat {
    /// `en.json`
    Json,
    /// `en.yml` / `en.yaml`
    Yaml,
}

impl LocaleFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(LocaleFormat::Json),
            "yml" | "yaml" => Some(LocaleFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for LocaleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleFormat::Json => write!(f, "json"),
            LocaleFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// One locale file of a batch: which language it holds, its format and where it lives.
///
/// The language is the file's base name without extension and is the
/// only identity a loaded tree carries through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleFileDescriptor {
    language: String,
    format: LocaleFormat,
    path: String,
}

impl LocaleFileDescriptor {
    pub fn new(language: impl Into<String>, format: LocaleFormat, path: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            format,
            path: path.into(),
        }
    }

    /// Describe the file at `path`.
    ///
    /// Examples:
    /// - "config/locales/en.yml" -> language "en", format Yaml
    /// - "zh-CN.json" -> language "zh-CN", format Json
    /// - "notes.txt" -> UnsupportedFormat
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UnsupportedFormat> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();
        let format = LocaleFormat::from_path(path).ok_or_else(|| UnsupportedFormat {
            path: path_str.clone(),
        })?;
        let language = extract_language(path).ok_or_else(|| UnsupportedFormat {
            path: path_str.clone(),
        })?;
        Ok(Self::new(language, format, path_str))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn format(&self) -> LocaleFormat {
        self.format
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Extracts the language identifier from a file name.
///
/// Examples:
/// - "en.yml" -> Some("en")
/// - "/path/to/locales/pt-BR.json" -> Some("pt-BR")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
