use std::fmt;

use serde::{Serialize, Serializer};

/// Separator used when a key path is rendered as a locale code.
pub const KEY_SEPARATOR: &str = ".";

/// Address of one leaf in a translation tree.
///
/// A key path is a non-empty sequence of key segments, e.g. `["obj3", "obj32"]`.
/// Two key paths are equal when their segments are equal element-wise.
/// Rendered as the segments joined with `.` (`obj3.obj32`), which is the
/// locale code shown in reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// A single-segment path for a top-level key.
    pub fn root(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Build a path from its segments. Returns `None` for an empty sequence.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Split a dotted locale code back into a path.
    ///
    /// Examples:
    /// - "obj2" -> ["obj2"]
    /// - "obj3.obj32" -> ["obj3", "obj32"]
    pub fn parse(locale_code: &str) -> Option<Self> {
        if locale_code.is_empty() {
            return None;
        }
        Self::from_segments(locale_code.split(KEY_SEPARATOR))
    }

    /// A new path extending this one by `segment`.
    ///
    /// The receiver is left untouched, so sibling branches built from the
    /// same prefix never observe each other's segments.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The `.`-joined rendering, e.g. `obj3.obj32`.
    pub fn locale_code(&self) -> String {
        self.segments.join(KEY_SEPARATOR)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locale_code())
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.locale_code())
    }
}
