//! Batch warning rule.
//!
//! Reports the files and directories a lenient run left out of the
//! comparison.

use crate::{
    core::{BatchReport, BatchWarning},
    issues::{
        DuplicateLanguageIssue, Issue, LoadFailureIssue, NoFilesForParsingIssue,
        UnsupportedFormatIssue,
    },
};

pub fn check_batch_warning_issues(batch: &BatchReport) -> Vec<Issue> {
    batch
        .warnings
        .iter()
        .map(|warning| match warning {
            BatchWarning::LoadFailure(failure) => Issue::LoadFailure(LoadFailureIssue {
                failure: failure.clone(),
            }),
            BatchWarning::UnsupportedFormat(unsupported) => {
                Issue::UnsupportedFormat(UnsupportedFormatIssue {
                    path: unsupported.path.clone(),
                })
            }
            BatchWarning::NoFilesForParsing { directory } => {
                Issue::NoFilesForParsing(NoFilesForParsingIssue {
                    directory: directory.clone(),
                })
            }
            BatchWarning::DuplicateLanguage { language, path } => {
                Issue::DuplicateLanguage(DuplicateLanguageIssue {
                    language: language.clone(),
                    path: path.clone(),
                })
            }
        })
        .collect()
}
