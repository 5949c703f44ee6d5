//! Missing translation detection rule.
//!
//! Turns the aggregated records of a batch into issues located at the
//! base language's file.

use crate::{core::BatchReport, issues::MissingTranslationIssue};

pub fn check_missing_translation_issues(batch: &BatchReport) -> Vec<MissingTranslationIssue> {
    batch
        .records
        .iter()
        .map(|record| MissingTranslationIssue {
            base_file: batch
                .file_for(&record.base_language)
                .map(|f| f.path().to_string())
                .unwrap_or_else(|| batch.parent_dir.clone()),
            record: record.clone(),
        })
        .collect()
}
