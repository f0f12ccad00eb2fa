//! Decides whether an absent group has mandatory content.

use crate::model::{Fields, SchemaNode};

/// What to do with a group the config leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Nothing inside is required; leave the group absent.
    NotRequired,
    /// Every required leaf inside has a default; materialize the group.
    AutoAppend,
    /// The named required leaf has no default; reject the config.
    HardViolation(String),
}

impl Fields {
    /// Scan these fields (recursively) for required content.
    ///
    /// The first required leaf without a default, in declaration order,
    /// short-circuits the scan. Otherwise any required leaf with a default
    /// anywhere in the subtree yields [`Requirement::AutoAppend`].
    pub fn requirement(&self) -> Requirement {
        let mut outcome = Requirement::NotRequired;
        for (name, node) in self.iter() {
            match node {
                SchemaNode::Leaf(leaf) if leaf.required => {
                    if leaf.default_value.is_none() {
                        return Requirement::HardViolation(name.to_string());
                    }
                    outcome = Requirement::AutoAppend;
                }
                SchemaNode::Leaf(_) => {}
                SchemaNode::Group { fields } => match fields.requirement() {
                    violation @ Requirement::HardViolation(_) => return violation,
                    Requirement::AutoAppend => outcome = Requirement::AutoAppend,
                    Requirement::NotRequired => {}
                },
            }
        }
        outcome
    }
}
