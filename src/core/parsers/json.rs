use serde_json::Value;

use crate::core::data::{Node, Scalar, TranslationTree};

/// Parse the content of a JSON locale file into a translation tree.
///
/// The document root must be an object. Key order follows the file.
pub fn parse_json_str(content: &str) -> Result<TranslationTree, String> {
    let json: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    match json {
        Value::Object(map) => Ok(object_to_tree(map)),
        other => Err(format!(
            "expected an object at the document root, found {}",
            describe(&other)
        )),
    }
}

fn object_to_tree(map: serde_json::Map<String, Value>) -> TranslationTree {
    map.into_iter()
        .map(|(key, value)| (key, value_to_node(value)))
        .collect()
}

fn value_to_node(value: Value) -> Node {
    match value {
        Value::Object(map) => Node::Branch(object_to_tree(map)),
        Value::String(s) => Node::Leaf(Scalar::String(s)),
        Value::Number(n) => Node::Leaf(Scalar::Number(n.to_string())),
        Value::Bool(b) => Node::Leaf(Scalar::Bool(b)),
        Value::Null => Node::Leaf(Scalar::Null),
        // Arrays are addressed as a whole, never by index.
        Value::Array(items) => {
            Node::Leaf(Scalar::List(items.into_iter().map(value_to_node).collect()))
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    }
}

#[cfg(test)]
mod tests {
    use crate::core::data::{KeyPath, Node, Scalar};
    use crate::core::parsers::json::*;

    #[test]
    fn test_parse_simple() {
        let tree = parse_json_str(r#"{"Common": {"save": "Save", "cancel": "Cancel"}}"#).unwrap();

        assert_eq!(
            tree.resolve(&KeyPath::parse("Common.save").unwrap()),
            Some(&Scalar::String("Save".to_string()))
        );
        assert_eq!(
            tree.resolve(&KeyPath::parse("Common.cancel").unwrap()),
            Some(&Scalar::String("Cancel".to_string()))
        );
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let tree = parse_json_str(r#"{"zebra": "Z", "apple": "A", "mango": "M"}"#).unwrap();
        let keys: Vec<&String> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_scalar_kinds() {
        let tree = parse_json_str(r#"{"n": 1.5, "b": false, "z": null}"#).unwrap();
        assert_eq!(tree.get("n"), Some(&Node::Leaf(Scalar::Number("1.5".to_string()))));
        assert_eq!(tree.get("b"), Some(&Node::Leaf(Scalar::Bool(false))));
        assert_eq!(tree.get("z"), Some(&Node::Leaf(Scalar::Null)));
    }

    #[test]
    fn test_parse_array_is_a_single_leaf() {
        let tree = parse_json_str(r#"{"benefits": ["Fast", "Safe"]}"#).unwrap();
        let Some(Node::Leaf(scalar)) = tree.get("benefits") else {
            panic!("expected a leaf");
        };
        assert!(matches!(scalar, Scalar::List(items) if items.len() == 2));
        assert_eq!(scalar.to_string(), "Fast, Safe");
    }

    #[test]
    fn test_parse_empty_object() {
        let tree = parse_json_str("{}").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_json_str(r#"["a", "b"]"#).unwrap_err();
        assert!(err.contains("an array"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_json_str(r#"{"a": "#).is_err());
    }
}
