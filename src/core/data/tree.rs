use std::fmt;

use indexmap::IndexMap;

use super::key_path::{KEY_SEPARATOR, KeyPath};

/// A leaf value in a translation tree.
///
/// Every non-mapping value found in a locale file is a leaf, whatever its
/// native type. Numbers keep their textual form so that leaves compare
/// the same way regardless of the source format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// `"submit": "Submit"`
    String(String),
    /// `"count": 3`
    Number(String),
    /// `"enabled": true`
    Bool(bool),
    /// `"empty": null`
    Null,
    /// `"days": ["Mon", "Tue"]`
    List(Vec<Node>),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{}", s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => Ok(()),
            Scalar::List(items) => {
                let values: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Node::Leaf(scalar) => scalar.to_string(),
                        Node::Branch(_) => "{...}".to_string(),
                    })
                    .collect();
                write!(f, "{}", values.join(", "))
            }
        }
    }
}

/// A node of a translation tree: either a leaf or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Scalar),
    Branch(TranslationTree),
}

impl Node {
    pub fn string(value: impl Into<String>) -> Self {
        Node::Leaf(Scalar::String(value.into()))
    }
}

/// Nested key/value structure of one language's locale file.
///
/// Keys are kept in file order, which is the order key paths are
/// discovered in and therefore the order missing entries are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    entries: IndexMap<String, Node>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, segment: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(segment.into(), node)
    }

    pub fn get(&self, segment: &str) -> Option<&Node> {
        self.entries.get(segment)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follow `path` down the tree and return the leaf at its end.
    ///
    /// Returns `None` if a segment is absent, if an intermediate segment
    /// is a leaf, or if the path ends on a branch.
    pub fn resolve(&self, path: &KeyPath) -> Option<&Scalar> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            match current.get(segment)? {
                Node::Branch(sub) => current = sub,
                Node::Leaf(_) => return None,
            }
        }
        match current.get(last)? {
            Node::Leaf(scalar) => Some(scalar),
            Node::Branch(_) => None,
        }
    }

    /// First key, depth-first, whose segment contains the key separator.
    ///
    /// Such a key would render the same locale code as a nested one
    /// (`"a.b"` and `a -> b`), so trees holding one are not comparable.
    pub fn find_separator_key(&self) -> Option<KeyPath> {
        self.find_separator_key_under(None)
    }

    fn find_separator_key_under(&self, prefix: Option<&KeyPath>) -> Option<KeyPath> {
        for (segment, node) in self.iter() {
            let path = match prefix {
                Some(prefix) => prefix.child(segment.as_str()),
                None => KeyPath::root(segment.as_str()),
            };
            if segment.contains(KEY_SEPARATOR) {
                return Some(path);
            }
            if let Node::Branch(sub) = node
                && let Some(found) = sub.find_separator_key_under(Some(&path))
            {
                return Some(found);
            }
        }
        None
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for TranslationTree {
    fn from_iter<T: IntoIterator<Item = (K, Node)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
