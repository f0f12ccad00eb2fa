//! Compiled schema tree.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A single compiled field: either a nested group or a flat leaf.
///
/// Serializes back to the declaration shape it was compiled from
/// (`{"fields": {...}}` for groups, `{"required", "defaultValue"}` for leaves).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    /// A field whose value is itself an object with declared fields.
    Group { fields: Fields },
    /// A flat field.
    Leaf(LeafField),
}

impl SchemaNode {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Group { .. } => "group",
            SchemaNode::Leaf(_) => "leaf",
        }
    }

    /// Children of a group node, or `None` for leaves.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            SchemaNode::Group { fields } => Some(fields),
            SchemaNode::Leaf(_) => None,
        }
    }

    /// Leaf metadata, or `None` for groups.
    pub fn leaf(&self) -> Option<&LeafField> {
        match self {
            SchemaNode::Group { .. } => None,
            SchemaNode::Leaf(leaf) => Some(leaf),
        }
    }
}

/// Metadata for a flat field.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafField {
    /// Whether an absent or null value must be filled or rejected.
    pub required: bool,
    /// Value assigned when a required field is absent or null. Never `Null`.
    pub default_value: Option<Value>,
}

impl LeafField {
    /// A required leaf with no default.
    pub fn required() -> Self {
        Self {
            required: true,
            default_value: None,
        }
    }

    /// A required leaf falling back to `default_value`.
    pub fn required_with_default(default_value: impl Into<Value>) -> Self {
        let default_value = default_value.into();
        Self {
            required: true,
            default_value: (!default_value.is_null()).then_some(default_value),
        }
    }
}

/// Ordered mapping from field name to compiled node.
///
/// Registration order is preserved; inserting an existing name replaces the
/// node without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, SchemaNode)>,
}

impl Fields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, node: SchemaNode) -> Option<SchemaNode> {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, node)),
            None => {
                self.entries.push((name, node));
                None
            }
        }
    }

    /// Fetch a node by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}
