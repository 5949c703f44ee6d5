//! Rule implementations for missing-text.
//!
//! Pure functions turning a `BatchReport` into user-facing issues. Each
//! function takes only the batch it inspects and returns its issues in
//! batch order.
//!
//! ## Module Structure
//!
//! - `missing_translation`: Entries absent from sibling locale files
//! - `batch_warning`: Files and directories left out of a comparison

pub mod batch_warning;
pub mod missing_translation;

use crate::{core::BatchReport, issues::Issue};

/// Every issue of one batch: warnings first, then missing translations.
pub fn check_batch_issues(batch: &BatchReport) -> Vec<Issue> {
    let mut issues = batch_warning::check_batch_warning_issues(batch);
    issues.extend(
        missing_translation::check_missing_translation_issues(batch)
            .into_iter()
            .map(Issue::MissingTranslation),
    );
    issues
}
