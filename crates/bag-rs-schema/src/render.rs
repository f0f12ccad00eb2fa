//! Indented text rendering of a schema.

use crate::Schema;
use crate::model::{Fields, SchemaNode};
use serde_json::Value;
use std::fmt;

/// Indentation added per nesting level.
const INDENT: &str = "  ";

impl Schema {
    /// Render the schema as indented text, one line per field.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(f, self.fields(), 0)
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &Fields, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    for (name, node) in fields.iter() {
        match node {
            SchemaNode::Group { fields } => {
                writeln!(f, "{indent}{name}: {{")?;
                write_fields(f, fields, depth + 1)?;
                writeln!(f, "{indent}}}")?;
            }
            SchemaNode::Leaf(leaf) => {
                writeln!(
                    f,
                    "{indent}{name}: {{ required: {}, defaultValue: {} }}",
                    leaf.required,
                    DefaultValue(leaf.default_value.as_ref())
                )?;
            }
        }
    }
    Ok(())
}

/// Strings print bare, everything else as compact JSON, absent as `null`.
struct DefaultValue<'a>(Option<&'a Value>);

impl fmt::Display for DefaultValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("null"),
            Some(Value::String(value)) => f.write_str(value),
            Some(value) => write!(f, "{value}"),
        }
    }
}
