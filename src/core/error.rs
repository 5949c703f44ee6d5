//! Error taxonomy of the batch pipeline.
//!
//! - `LoadFailure`: a locale file could not be turned into a tree
//! - `UnsupportedFormat`: a file is not a recognized locale format
//! - `InternalConsistencyError`: a key path no longer resolves in its own tree
//!
//! The first two are recoverable depending on the configured failure
//! policy. The last one is always fatal.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a locale file failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadFailureReason {
    /// The file is missing or cannot be read.
    Unreadable,
    /// The file was read but its content is not a valid locale tree.
    Malformed,
}

impl fmt::Display for LoadFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailureReason::Unreadable => write!(f, "Failed to read"),
            LoadFailureReason::Malformed => write!(f, "Failed to parse"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{reason} locale file '{path}': {message}")]
pub struct LoadFailure {
    pub path: String,
    pub reason: LoadFailureReason,
    pub message: String,
}

impl LoadFailure {
    pub fn unreadable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: LoadFailureReason::Unreadable,
            message: message.into(),
        }
    }

    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: LoadFailureReason::Malformed,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Unsupported locale file '{path}'. Please ensure the file is .json, .yml or .yaml")]
pub struct UnsupportedFormat {
    pub path: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InternalConsistencyError {
    #[error("key path '{key_path}' no longer resolves to a leaf in the '{language}' tree")]
    UnresolvedKeyPath { language: String, key_path: String },

    #[error("no translation tree was loaded for language '{language}'")]
    MissingTree { language: String },
}

/// Failure of a whole batch.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Load(#[from] LoadFailure),

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("Internal consistency failure in '{directory}': {source}")]
    InternalConsistency {
        directory: String,
        #[source]
        source: InternalConsistencyError,
    },
}
