//! missing-text - missing translation detector for per-language locale files
//!
//! Every directory of sibling locale files (`en.yml`, `fr.yml`, `es.json`, ...)
//! is compared language against language. Each key present in one file and
//! absent from another is reported once, with the base string to translate and
//! every language lacking it.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporters, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Comparison engine (discovery, loading, flatten, diff, aggregate)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Conversion of batch reports into issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
