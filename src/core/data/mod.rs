//! Core data types used across all pipeline stages.
//!
//! ## Module Structure
//!
//! - `key_path`: KeyPath, the address of one leaf in a translation tree
//! - `locale_file`: LocaleFileDescriptor and LocaleFormat
//! - `record`: MissingEntryRecord, the aggregated output of a batch
//! - `tree`: TranslationTree, Node and Scalar

pub mod key_path;
pub mod locale_file;
pub mod record;
pub mod tree;

pub use key_path::{KEY_SEPARATOR, KeyPath};
pub use locale_file::{LocaleFileDescriptor, LocaleFormat, extract_language};
pub use record::MissingEntryRecord;
pub use tree::{Node, Scalar, TranslationTree};
