//! Key-path flattening.
//!
//! Turns a nested translation tree into the set of key paths addressing its
//! leaves, and applies that to every language of a batch.

use indexmap::{IndexMap, IndexSet};

use crate::core::data::{KeyPath, Node, TranslationTree};

/// Key paths of one language, in discovery order.
pub type KeySet = IndexSet<KeyPath>;

/// Key paths of every language in a batch, keyed by language.
pub type LanguageKeySets = IndexMap<String, KeySet>;

/// Translation trees of every language in a batch, keyed by language.
pub type LanguageTrees = IndexMap<String, TranslationTree>;

/// Collect the key path of every leaf in `tree`.
///
/// Depth-first, in key order. Empty branches contribute nothing; every
/// non-mapping value, whatever its type, is a leaf.
pub fn flatten(tree: &TranslationTree) -> KeySet {
    let mut keys = KeySet::new();
    collect_key_paths(tree, None, &mut keys);
    keys
}

fn collect_key_paths(tree: &TranslationTree, prefix: Option<&KeyPath>, keys: &mut KeySet) {
    for (segment, node) in tree.iter() {
        // Each branch owns its path; `child` never mutates the prefix.
        let path = match prefix {
            Some(prefix) => prefix.child(segment.as_str()),
            None => KeyPath::root(segment.as_str()),
        };
        match node {
            Node::Branch(sub) => collect_key_paths(sub, Some(&path), keys),
            Node::Leaf(_) => {
                keys.insert(path);
            }
        }
    }
}

/// Flatten every language's tree of a batch.
pub fn build_key_sets(trees: &LanguageTrees) -> LanguageKeySets {
    trees
        .iter()
        .map(|(language, tree)| (language.clone(), flatten(tree)))
        .collect()
}
