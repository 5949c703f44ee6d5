//! Issue types for locale comparison results.
//!
//! Each issue is self-contained with all information the reporters need to
//! display it.

use enum_dispatch::enum_dispatch;

use crate::core::{LoadFailure, MissingEntryRecord};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    LoadFailure,
    UnsupportedFormat,
    NoFilesForParsing,
    DuplicateLanguage,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::LoadFailure => write!(f, "load-failure"),
            Rule::UnsupportedFormat => write!(f, "unsupported-format"),
            Rule::NoFilesForParsing => write!(f, "no-files"),
            Rule::DuplicateLanguage => write!(f, "duplicate-language"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Entry present in a base language and absent from one or more siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    /// Locale file of the base language.
    pub base_file: String,
    pub record: MissingEntryRecord,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Locale file skipped because it could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailureIssue {
    pub failure: LoadFailure,
}

impl LoadFailureIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::LoadFailure
    }
}

/// File in a locale directory that is not a JSON or YAML locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFormatIssue {
    pub path: String,
}

impl UnsupportedFormatIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnsupportedFormat
    }
}

/// Directory whose files were all removed by skip patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoFilesForParsingIssue {
    pub directory: String,
}

impl NoFilesForParsingIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NoFilesForParsing
    }
}

/// Second file for a language already loaded from the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLanguageIssue {
    pub language: String,
    pub path: String,
}

impl DuplicateLanguageIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateLanguage
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while comparing locale files.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    LoadFailure(LoadFailureIssue),
    UnsupportedFormat(UnsupportedFormatIssue),
    NoFilesForParsing(NoFilesForParsingIssue),
    DuplicateLanguage(DuplicateLanguageIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::severity(),
            Issue::LoadFailure(_) => LoadFailureIssue::severity(),
            Issue::UnsupportedFormat(_) => UnsupportedFormatIssue::severity(),
            Issue::NoFilesForParsing(_) => NoFilesForParsingIssue::severity(),
            Issue::DuplicateLanguage(_) => DuplicateLanguageIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::rule(),
            Issue::LoadFailure(_) => LoadFailureIssue::rule(),
            Issue::UnsupportedFormat(_) => UnsupportedFormatIssue::rule(),
            Issue::NoFilesForParsing(_) => NoFilesForParsingIssue::rule(),
            Issue::DuplicateLanguage(_) => DuplicateLanguageIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A single locale file.
    File { path: &'a str },
    /// A whole locale directory.
    Directory { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn path(&self) -> &str {
        match self {
            ReportLocation::File { path } | ReportLocation::Directory { path } => path,
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls made
/// on `Issue` without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (locale code, failure kind, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.base_file,
        }
    }

    fn message(&self) -> String {
        self.record.locale_code.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.record.base_string,
            self.record.target_languages.join(", ")
        ))
    }
}

impl Report for LoadFailureIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.failure.path,
        }
    }

    fn message(&self) -> String {
        format!("{} locale file", self.failure.reason)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.failure.message.clone())
    }

    fn hint(&self) -> Option<&str> {
        Some("the file was left out of the comparison")
    }
}

impl Report for UnsupportedFormatIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File { path: &self.path }
    }

    fn message(&self) -> String {
        "Unsupported locale file".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("locale files must be .json, .yml or .yaml")
    }
}

impl Report for NoFilesForParsingIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Directory {
            path: &self.directory,
        }
    }

    fn message(&self) -> String {
        "No files for parsing".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("every file matched 'skipPatterns' in .missingtextrc.json")
    }
}

impl Report for DuplicateLanguageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File { path: &self.path }
    }

    fn message(&self) -> String {
        format!("Duplicate language '{}'", self.language)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("only the first file of a language is compared".to_string())
    }
}
