//! Locale directory discovery.
//!
//! Finds the batches of a run: every subdirectory of the locale root is one
//! batch, and the files lying directly in the root form one more. Skip
//! directories and skip patterns are applied here, so the batch coordinator
//! only ever sees files it should compare.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use regex::Regex;
use walkdir::WalkDir;

use crate::core::{
    data::{LocaleFileDescriptor, LocaleFormat},
    error::UnsupportedFormat,
};

/// Filtering rules applied while discovering locale directories.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// A file whose base name matches any of these is skipped.
    pub skip_patterns: Vec<Regex>,
    /// Subdirectories of the locale root with these names are not scanned.
    pub skip_directories: Vec<String>,
    /// Also compare the locale files lying directly in the locale root.
    pub search_direct_locale: bool,
}

impl DiscoveryOptions {
    fn is_skipped_file(&self, file_name: &str) -> bool {
        self.skip_patterns.iter().any(|p| p.is_match(file_name))
    }

    fn is_skipped_directory(&self, name: &str) -> bool {
        self.skip_directories.iter().any(|d| d == name)
    }
}

/// One directory of sibling locale files, ready to be compared as a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDirectory {
    pub path: PathBuf,
    /// Base name of the directory (e.g., "hash1").
    pub name: String,
    /// Locale files to compare, sorted by path.
    pub files: Vec<LocaleFileDescriptor>,
    /// Files with an extension that is not a locale format.
    pub unsupported: Vec<UnsupportedFormat>,
    /// Number of files dropped by skip patterns.
    pub skipped_by_pattern: usize,
}

impl LocaleDirectory {
    /// True when the directory had files but skip patterns removed all of them.
    pub fn all_skipped(&self) -> bool {
        self.files.is_empty() && self.unsupported.is_empty() && self.skipped_by_pattern > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidates {
    /// Every file is a candidate; unknown extensions are reported.
    AllFiles,
    /// Only files with a locale extension are candidates.
    LocaleFilesOnly,
}

/// Discover every batch under `root`, in a stable order.
///
/// Subdirectories come first, sorted by name, followed by the root's own
/// files when `search_direct_locale` is set. Directories without any file
/// are left out.
pub fn discover_locale_directories(
    root: impl AsRef<Path>,
    options: &DiscoveryOptions,
) -> Result<Vec<LocaleDirectory>> {
    let root = root.as_ref();

    if !root.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: Check your .missingtextrc.json 'localeRoot' setting.",
            root.display()
        );
    }

    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut directories = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "Skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if is_hidden(&name) {
            continue;
        }
        if options.is_skipped_directory(&name) {
            tracing::debug!(directory = %name, "Skipping directory");
            continue;
        }

        if let Some(directory) = scan_directory(entry.path(), name, options, Candidates::AllFiles)
        {
            directories.push(directory);
        }
    }

    if options.search_direct_locale {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        if let Some(directory) = scan_directory(root, name, options, Candidates::LocaleFilesOnly) {
            directories.push(directory);
        }
    }

    tracing::debug!(count = directories.len(), "Discovered locale directories");
    Ok(directories)
}

fn scan_directory(
    path: &Path,
    name: String,
    options: &DiscoveryOptions,
    candidates: Candidates,
) -> Option<LocaleDirectory> {
    let mut files = Vec::new();
    let mut unsupported = Vec::new();
    let mut skipped_by_pattern = 0;

    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if is_hidden(&file_name) {
            continue;
        }
        if candidates == Candidates::LocaleFilesOnly
            && LocaleFormat::from_path(entry.path()).is_none()
        {
            continue;
        }
        if options.is_skipped_file(&file_name) {
            tracing::debug!(file = %file_name, "Skipping file matching skip pattern");
            skipped_by_pattern += 1;
            continue;
        }

        match LocaleFileDescriptor::from_path(entry.path()) {
            Ok(descriptor) => files.push(descriptor),
            Err(err) => unsupported.push(err),
        }
    }

    if files.is_empty() && unsupported.is_empty() && skipped_by_pattern == 0 {
        tracing::debug!(directory = %path.display(), "No locale files found");
        return None;
    }

    Some(LocaleDirectory {
        path: path.to_path_buf(),
        name,
        files,
        unsupported,
        skipped_by_pattern,
    })
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
