//! Locale batch coordination.
//!
//! A batch is one directory of sibling locale files. The coordinator loads
//! every file, tags each tree with its descriptor's language, then runs
//! flatten, diff and aggregate in order. The resulting `BatchReport` is
//! what reporters consume.

use serde::{Deserialize, Serialize};

use crate::core::{
    aggregate::aggregate_missing_entries,
    data::{LocaleFileDescriptor, MissingEntryRecord},
    diff::compute_diff_map,
    discovery::LocaleDirectory,
    error::{BatchError, LoadFailure, UnsupportedFormat},
    flatten::{LanguageTrees, build_key_sets},
    loader::Loader,
    run::RunContext,
};

/// What to do when a file of a batch cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the batch with the first failure.
    Strict,
    /// Skip the file with a warning and continue.
    #[default]
    Lenient,
}

/// A recoverable problem met while running a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BatchWarning {
    LoadFailure(LoadFailure),
    UnsupportedFormat(UnsupportedFormat),
    /// Skip patterns removed every file of the directory.
    #[serde(rename_all = "camelCase")]
    NoFilesForParsing { directory: String },
    /// A second file resolved to a language that was already loaded.
    #[serde(rename_all = "camelCase")]
    DuplicateLanguage { language: String, path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchStatus {
    /// Every loaded language was compared with every other.
    Complete,
    /// Fewer than two languages loaded; nothing was compared.
    InsufficientLanguages,
}

/// Outcome of one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Path of the directory the batch was read from.
    pub parent_dir: String,
    /// Base name of that directory.
    pub directory: String,
    pub files: Vec<LocaleFileDescriptor>,
    pub status: BatchStatus,
    /// Languages whose tree took part in the comparison, in batch order.
    pub loaded_languages: Vec<String>,
    /// The file each loaded language was read from, parallel to `loaded_languages`.
    pub loaded_files: Vec<LocaleFileDescriptor>,
    /// Paths of files that were left out of the comparison.
    pub skipped_files: Vec<String>,
    pub records: Vec<MissingEntryRecord>,
    pub warnings: Vec<BatchWarning>,
}

impl BatchReport {
    pub fn loaded_count(&self) -> usize {
        self.loaded_languages.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_files.len()
    }

    pub fn has_missing(&self) -> bool {
        !self.records.is_empty()
    }

    /// The file a loaded language's tree came from.
    ///
    /// `None` when no file of that language loaded.
    pub fn file_for(&self, language: &str) -> Option<&LocaleFileDescriptor> {
        self.loaded_files.iter().find(|f| f.language() == language)
    }
}

/// Receives batch reports as a run progresses.
pub trait Reporter {
    fn report(&mut self, run: &RunContext, batch: &BatchReport) -> anyhow::Result<()>;

    /// Called once after the last batch of the run.
    fn finish(&mut self, _run: &RunContext) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Runs the comparison pipeline on one locale directory at a time.
#[derive(Debug, Clone)]
pub struct BatchCoordinator<L> {
    loader: L,
    policy: FailurePolicy,
}

impl<L: Loader> BatchCoordinator<L> {
    pub fn new(loader: L, policy: FailurePolicy) -> Self {
        Self { loader, policy }
    }

    /// Load and compare every file of `directory`.
    ///
    /// # Errors
    ///
    /// With `FailurePolicy::Strict`, the first unsupported or unloadable file
    /// aborts the batch. An `InternalConsistency` error is returned in both
    /// modes.
    pub fn run(
        &self,
        run: &RunContext,
        directory: &LocaleDirectory,
    ) -> Result<BatchReport, BatchError> {
        let parent_dir = directory.path.display().to_string();
        tracing::debug!(
            run_id = %run.run_id,
            directory = %parent_dir,
            files = directory.files.len(),
            "Running batch"
        );

        let mut warnings = Vec::new();
        let mut skipped_files = Vec::new();

        if directory.all_skipped() {
            tracing::warn!(directory = %parent_dir, "No files for parsing");
            warnings.push(BatchWarning::NoFilesForParsing {
                directory: parent_dir.clone(),
            });
        }

        for unsupported in &directory.unsupported {
            if self.policy == FailurePolicy::Strict {
                return Err(unsupported.clone().into());
            }
            tracing::warn!(path = %unsupported.path, "Skipping unsupported file");
            skipped_files.push(unsupported.path.clone());
            warnings.push(BatchWarning::UnsupportedFormat(unsupported.clone()));
        }

        let mut trees = LanguageTrees::new();
        let mut loaded_files = Vec::new();
        for descriptor in &directory.files {
            let language = descriptor.language();

            if trees.contains_key(language) {
                tracing::warn!(path = descriptor.path(), language, "Skipping duplicate language");
                skipped_files.push(descriptor.path().to_string());
                warnings.push(BatchWarning::DuplicateLanguage {
                    language: language.to_string(),
                    path: descriptor.path().to_string(),
                });
                continue;
            }

            match self.loader.load(descriptor) {
                Ok(tree) => {
                    trees.insert(language.to_string(), tree);
                    loaded_files.push(descriptor.clone());
                }
                Err(failure) if self.policy == FailurePolicy::Strict => {
                    return Err(failure.into());
                }
                Err(failure) => {
                    tracing::warn!(path = %failure.path, "{}", failure);
                    skipped_files.push(failure.path.clone());
                    warnings.push(BatchWarning::LoadFailure(failure));
                }
            }
        }

        let loaded_languages: Vec<String> = trees.keys().cloned().collect();

        let (status, records) = if trees.len() < 2 {
            tracing::debug!(
                directory = %parent_dir,
                loaded = trees.len(),
                "Not enough languages to compare"
            );
            (BatchStatus::InsufficientLanguages, Vec::new())
        } else {
            let key_sets = build_key_sets(&trees);
            let diff_map = compute_diff_map(&key_sets);
            let records = aggregate_missing_entries(&diff_map, &trees).map_err(|source| {
                BatchError::InternalConsistency {
                    directory: parent_dir.clone(),
                    source,
                }
            })?;
            (BatchStatus::Complete, records)
        };

        tracing::debug!(
            directory = %parent_dir,
            records = records.len(),
            warnings = warnings.len(),
            "Batch finished"
        );

        Ok(BatchReport {
            parent_dir,
            directory: directory.name.clone(),
            files: directory.files.clone(),
            status,
            loaded_languages,
            loaded_files,
            skipped_files,
            records,
            warnings,
        })
    }
}
