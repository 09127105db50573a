//! Core node types and operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Node represents one vertex of a parsed YAML/JSON resource tree.
///
/// Absence is not a Node variant: a key that is missing from a [`Mapping`]
/// yields `None` from [`Mapping::get`], while a key explicitly set to null
/// yields `Some(&Node::Null)`. Traversal code relies on that distinction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

/// Mapping is a string-keyed map of child nodes, preserving document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    fields: IndexMap<String, Node>,
}

impl Node {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Node::Sequence(_) | Node::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Returns a short label for the node's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

impl Mapping {
    pub fn new() -> Self {
        Mapping {
            fields: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.fields.get_mut(key)
    }

    /// Inserts a value, overwriting any previous one. New keys are appended;
    /// overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) {
        self.fields.insert(key.into(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.fields.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.fields.iter()
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Int(i)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

/// Parse a node tree from JSON.
pub fn from_json(json: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a node tree to JSON.
pub fn to_json(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string(node)
}

/// Parse a node tree from YAML.
pub fn from_yaml(yaml: &str) -> Result<Node, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a node tree to YAML.
pub fn to_yaml(node: &Node) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_types() {
        assert!(Node::Null.is_null());
        assert!(Node::Null.is_scalar());
        assert!(Node::Bool(true).is_scalar());
        assert!(Node::Int(42).is_scalar());
        assert!(Node::String("hello".into()).is_scalar());
        assert!(Node::Sequence(vec![]).is_sequence());
        assert!(Node::Mapping(Mapping::new()).is_mapping());
    }

    #[test]
    fn test_mapping_operations() {
        let mut map = Mapping::new();
        assert!(map.is_empty());

        map.insert("key", Node::from("value"));
        assert!(!map.is_empty());
        assert!(map.contains_key("key"));
        assert_eq!(map.get("key"), Some(&Node::String("value".into())));

        map.remove("key");
        assert!(!map.contains_key("key"));
    }

    #[test]
    fn test_null_vs_absent() {
        let mut map = Mapping::new();
        map.insert("present", Node::Null);

        assert_eq!(map.get("present"), Some(&Node::Null));
        assert_eq!(map.get("absent"), None);
    }

    #[test]
    fn test_mapping_preserves_order() {
        let node = from_yaml("z: 1\na: 2\nm: 3\n").unwrap();
        let map = node.as_mapping().unwrap();
        let keys: Vec<&String> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);

        assert_eq!(to_yaml(&node).unwrap(), "z: 1\na: 2\nm: 3\n");
    }

    #[test]
    fn test_yaml_null_parses_to_null_node() {
        let node = from_yaml("replicas: null\n").unwrap();
        let map = node.as_mapping().unwrap();
        assert_eq!(map.get("replicas"), Some(&Node::Null));
    }

    #[test]
    fn test_json_roundtrip() {
        let value = Node::Mapping({
            let mut m = Mapping::new();
            m.insert("name", Node::from("test"));
            m.insert("count", Node::from(42));
            m
        });

        let json = to_json(&value).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(value, parsed);
    }
}
