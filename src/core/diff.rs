//! Cross-language diffing.
//!
//! For every ordered pair of distinct languages `(source, target)`, the diff
//! is the set of key paths `source` has and `target` lacks. `diff(A, B)` and
//! `diff(B, A)` are computed independently; neither is derived from the other.

use indexmap::IndexMap;

use crate::core::flatten::{KeySet, LanguageKeySets};

/// Ordered language pair: (source, target).
pub type LanguagePair = (String, String);

/// Missing key paths for every ordered pair of distinct languages.
///
/// Holds an entry for every pair, empty ones included. Iteration follows
/// batch order: all pairs of the first language as source, then the second, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffMap {
    entries: IndexMap<LanguagePair, KeySet>,
}

impl DiffMap {
    /// Key paths present in `source` and absent from `target`.
    ///
    /// `None` when the pair was not part of the batch (including self-pairs).
    pub fn get(&self, source: &str, target: &str) -> Option<&KeySet> {
        self.entries
            .get(&(source.to_string(), target.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguagePair, &KeySet)> {
        self.entries.iter()
    }

    /// Number of language pairs (not of missing keys).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the diff map for a batch.
///
/// O(L² · K) for L languages of K keys each; L is the number of locale
/// files in one directory, so this stays small.
pub fn compute_diff_map(key_sets: &LanguageKeySets) -> DiffMap {
    let mut entries = IndexMap::new();

    for (source, source_keys) in key_sets {
        for (target, target_keys) in key_sets {
            if source == target {
                continue;
            }
            entries.insert(
                (source.clone(), target.clone()),
                missing_keys(source_keys, target_keys),
            );
        }
    }

    DiffMap { entries }
}

/// `source \ target`, keeping `source`'s discovery order.
fn missing_keys(source: &KeySet, target: &KeySet) -> KeySet {
    source
        .iter()
        .filter(|key| !target.contains(*key))
        .cloned()
        .collect::<KeySet>()
}
