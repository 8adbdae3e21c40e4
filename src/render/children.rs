//! Child enumeration for types that know their own structure
//!
//! The generic walker takes an enumeration function; this trait is the
//! declarative alternative for value types with an obvious notion of
//! named children. The JSON adapter is the stock implementation.

use serde_json::Value;

use super::strategies::Node;

/// Types that can list their own named children.
///
/// Implementors produce a fresh `Vec` per call; the walker enumerates
/// lazily, one level at a time, and keeps nothing once a subtree is done.
pub trait ListChildren: Sized {
    fn list_children(&self) -> Vec<Node<Self>>;
}

/// JSON values enumerate the way `Object.entries` would: objects yield
/// one node per key in insertion order, arrays one node per element named
/// by its index. Scalars and `null` have no children.
impl ListChildren for Value {
    fn list_children(&self) -> Vec<Node<Self>> {
        match self {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| Node::new(key.clone(), value.clone()))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, value)| Node::new(index.to_string(), value.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }
}
