//! Locale file parsers.
//!
//! This module turns the content of a locale file into a `TranslationTree`:
//! - `json`: JSON locale files (`en.json`)
//! - `yaml`: YAML locale files (`en.yml`, `en.yaml`)

pub mod json;
pub mod yaml;
