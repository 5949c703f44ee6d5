//! Missing-entry aggregation.
//!
//! Regroups the per-pair diff results by `(base language, key path)` so that
//! a key missing in several languages yields a single record listing all of
//! them, with the base string resolved from the base language's tree.

use indexmap::IndexMap;

use crate::core::{
    data::{KeyPath, MissingEntryRecord},
    diff::DiffMap,
    error::InternalConsistencyError,
    flatten::{LanguageTrees, flatten},
};

/// Build one record per `(base language, key path)` found missing somewhere.
///
/// Records are grouped by base language in batch order, then ordered by the
/// position of the key path in the base language's tree. Target languages
/// keep batch order.
///
/// # Errors
///
/// Returns `InternalConsistencyError` when a key path from the diff map does
/// not resolve to a leaf in its base language's tree, or when the base
/// language has no tree at all. Both mean the inputs changed between stages.
pub fn aggregate_missing_entries(
    diff_map: &DiffMap,
    trees: &LanguageTrees,
) -> Result<Vec<MissingEntryRecord>, InternalConsistencyError> {
    let mut grouped: IndexMap<&str, IndexMap<&KeyPath, Vec<String>>> = IndexMap::new();

    for ((source, target), missing) in diff_map.iter() {
        for key_path in missing {
            grouped
                .entry(source.as_str())
                .or_default()
                .entry(key_path)
                .or_default()
                .push(target.clone());
        }
    }

    let mut records = Vec::new();

    for (base_language, mut by_path) in grouped {
        let tree = trees
            .get(base_language)
            .ok_or_else(|| InternalConsistencyError::MissingTree {
                language: base_language.to_string(),
            })?;

        // Report in the order keys appear in the base file.
        let discovery = flatten(tree);
        by_path.sort_by(|a, _, b, _| {
            let a_pos = discovery.get_index_of(*a).unwrap_or(usize::MAX);
            let b_pos = discovery.get_index_of(*b).unwrap_or(usize::MAX);
            a_pos.cmp(&b_pos)
        });

        for (key_path, target_languages) in by_path {
            let base_string = tree.resolve(key_path).ok_or_else(|| {
                InternalConsistencyError::UnresolvedKeyPath {
                    language: base_language.to_string(),
                    key_path: key_path.locale_code(),
                }
            })?;

            records.push(MissingEntryRecord::new(
                base_language,
                base_string.to_string(),
                target_languages,
                key_path.clone(),
            ));
        }
    }

    Ok(records)
}
