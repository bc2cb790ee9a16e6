//! The `Node` type: a name, an optional type hint, ordered arguments,
//! unordered (last-write-wins) properties, and ordered children.

use std::collections::BTreeMap;

use crate::identifier::{Identifier, TypeHint};
use crate::value::Value;

/// A single KDL node.
///
/// Properties are stored in a [`BTreeMap`] keyed by [`Identifier`], which
/// both implements last-write-wins (`insert` on an existing key replaces the
/// value) and gives the writer's lexicographic property ordering for free,
/// without a separate sort step.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub type_hint: TypeHint,
    pub name: Identifier,
    pub args: Vec<Value>,
    pub props: BTreeMap<Identifier, Value>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            type_hint: TypeHint::Absent,
            name: name.into(),
            args: Vec::new(),
            props: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_type_hint(mut self, hint: impl Into<TypeHint>) -> Self {
        self.type_hint = hint.into();
        self
    }

    pub fn push_arg(&mut self, value: impl Into<Value>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    /// Set a property, overwriting any existing value for the same key.
    pub fn set_prop(&mut self, key: impl Into<Identifier>, value: impl Into<Value>) -> &mut Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn push_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn get_prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}
