//! Untyped document tree
//!
//! A design file arrives as nested JSON. Nothing about its schema is assumed
//! here: a [`Node`] is a mapping, a sequence, or a primitive, and the
//! [`classify`](crate::classify) module decides what a node *is* by looking
//! at which fields are present.

use indexmap::IndexMap;

use crate::error::Result;

/// Leaf value of a document tree
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// A node of a design document
///
/// Map keys keep the order they had in the source document, which is the
/// order [`walk`](crate::walk::walk) visits them in.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Map(IndexMap<String, Node>),
    List(Vec<Node>),
    Primitive(Primitive),
}

impl Node {
    pub const NULL: Node = Node::Primitive(Primitive::Null);

    /// Parse a JSON document into a node tree
    pub fn from_json_str(src: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(src)?;
        Ok(Self::from_json_value(value))
    }

    /// Convert an already parsed JSON value
    pub fn from_json_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Primitive(Primitive::Null),
            serde_json::Value::Bool(b) => Node::Primitive(Primitive::Bool(b)),
            serde_json::Value::Number(n) => {
                Node::Primitive(Primitive::Number(n.as_f64().unwrap_or(f64::NAN)))
            }
            serde_json::Value::String(s) => Node::Primitive(Primitive::String(s)),
            serde_json::Value::Array(items) => {
                Node::List(items.into_iter().map(Self::from_json_value).collect())
            }
            serde_json::Value::Object(fields) => Node::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Self::from_json_value(v)))
                    .collect(),
            ),
        }
    }

    /// Look up a field on a mapping node. Lists and primitives have no fields.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(fields) => fields.get(key),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Primitive(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Primitive(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    /// JavaScript-style truthiness
    ///
    /// `null`, `false`, `0`, `NaN` and `""` are falsy. Every mapping and
    /// sequence is truthy, even an empty one.
    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Map(_) | Node::List(_) => true,
            Node::Primitive(Primitive::Null) => false,
            Node::Primitive(Primitive::Bool(b)) => *b,
            Node::Primitive(Primitive::Number(n)) => *n != 0.0 && !n.is_nan(),
            Node::Primitive(Primitive::String(s)) => !s.is_empty(),
        }
    }

    /// Whether a field is present and truthy
    pub fn has_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(Node::is_truthy)
    }

    /// True for null and for composites without entries
    ///
    /// Booleans and numbers own no keys either, so they count as empty.
    /// A non-empty string still has characters and does not.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Map(fields) => fields.is_empty(),
            Node::List(items) => items.is_empty(),
            Node::Primitive(Primitive::String(s)) => s.is_empty(),
            Node::Primitive(_) => true,
        }
    }

    /// Primitives are leaves; the walker never hands them to a visitor
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Primitive(_))
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json_value(value)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Primitive(Primitive::Number(n))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Primitive(Primitive::String(s.to_string()))
    }
}
