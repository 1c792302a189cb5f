use serde_json::{Map, Value};

/// A decoded JSON value, as seen by the payload walker.
///
/// Strings, sequences and mappings are the only kinds that can carry links;
/// numbers, booleans and null collapse into [`Node::Ignored`].
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Scalar(&'a str),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    Ignored,
}

impl<'a> Node<'a> {
    /// Returns `true` for the node kinds the walker descends into.
    pub fn is_traversable(&self) -> bool {
        !matches!(self, Node::Ignored)
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Node::Scalar(text),
            Value::Array(items) => Node::Sequence(items),
            Value::Object(map) => Node::Mapping(map),
            Value::Null | Value::Bool(_) | Value::Number(_) => Node::Ignored,
        }
    }
}
