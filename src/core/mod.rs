//! Core comparison engine.
//!
//! ## Pipeline
//!
//! For each locale directory found by `discovery`:
//! 1. `loader`: read every locale file into a `TranslationTree`
//! 2. `flatten`: turn each tree into the key paths of its leaves
//! 3. `diff`: compare every ordered pair of languages
//! 4. `aggregate`: regroup the gaps into `MissingEntryRecord`s
//!
//! `batch` drives these steps for one directory and produces a `BatchReport`.
//!
//! ## Module Structure
//!
//! - `data`: Shared data types (trees, key paths, descriptors, records)
//! - `parsers`: JSON and YAML locale file parsers
//! - `error`: Error taxonomy of the pipeline
//! - `context`: Run settings merged from CLI, config file and defaults

pub mod aggregate;
pub mod batch;
pub mod context;
pub mod data;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod parsers;
pub mod run;

pub use batch::{
    BatchCoordinator, BatchReport, BatchStatus, BatchWarning, FailurePolicy, Reporter,
};
pub use context::CheckContext;
pub use data::{
    KeyPath, LocaleFileDescriptor, LocaleFormat, MissingEntryRecord, Node, Scalar,
    TranslationTree,
};
pub use discovery::{DiscoveryOptions, LocaleDirectory, discover_locale_directories};
pub use error::{BatchError, InternalConsistencyError, LoadFailure, UnsupportedFormat};
pub use loader::{FsLoader, Loader};
pub use run::RunContext;
