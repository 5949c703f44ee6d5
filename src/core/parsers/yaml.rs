use serde_yaml::{Mapping, Value};

use crate::core::data::{Node, Scalar, TranslationTree};

/// Parse the content of a YAML locale file into a translation tree.
///
/// Rails-style files wrap everything in a single key named after the
/// language (`en:` at the top of `en.yml`). When the only top-level key
/// equals `language` and holds a mapping, that wrapper is removed so the
/// tree is comparable with unwrapped files of other languages.
///
/// Merge keys (`<<: *defaults`) are resolved before the tree is built.
/// Keys are normalized to strings at every level, so a mapping holding both
/// `1:` and `"1":` is rejected.
pub fn parse_yaml_str(content: &str, language: &str) -> Result<TranslationTree, String> {
    let mut yaml: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    yaml.apply_merge().map_err(|e| e.to_string())?;

    let root = match yaml {
        Value::Mapping(map) => map,
        Value::Tagged(tagged) => match tagged.value {
            Value::Mapping(map) => map,
            _ => return Err("expected a mapping at the document root".to_string()),
        },
        Value::Null => return Err("the document is empty".to_string()),
        _ => return Err("expected a mapping at the document root".to_string()),
    };

    let tree = mapping_to_tree(root)?;
    Ok(unwrap_language_root(tree, language))
}

fn unwrap_language_root(tree: TranslationTree, language: &str) -> TranslationTree {
    let inner = match tree.get(language) {
        Some(Node::Branch(inner)) if tree.len() == 1 => Some(inner.clone()),
        _ => None,
    };
    inner.unwrap_or(tree)
}

fn mapping_to_tree(map: Mapping) -> Result<TranslationTree, String> {
    let mut tree = TranslationTree::new();
    for (key, value) in map {
        let segment = key_to_segment(&key)?;
        if tree.get(&segment).is_some() {
            return Err(format!(
                "duplicate key '{}' once keys are read as strings",
                segment
            ));
        }
        tree.insert(segment, value_to_node(value)?);
    }
    Ok(tree)
}

fn key_to_segment(key: &Value) -> Result<String, String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_to_segment(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("complex mapping keys are not supported in locale files".to_string())
        }
    }
}

fn value_to_node(value: Value) -> Result<Node, String> {
    Ok(match value {
        Value::Mapping(map) => Node::Branch(mapping_to_tree(map)?),
        Value::String(s) => Node::Leaf(Scalar::String(s)),
        Value::Number(n) => Node::Leaf(Scalar::Number(n.to_string())),
        Value::Bool(b) => Node::Leaf(Scalar::Bool(b)),
        Value::Null => Node::Leaf(Scalar::Null),
        Value::Sequence(items) => Node::Leaf(Scalar::List(
            items
                .into_iter()
                .map(value_to_node)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Value::Tagged(tagged) => value_to_node(tagged.value)?,
    })
}
