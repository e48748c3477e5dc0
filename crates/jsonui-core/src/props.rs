//! Raw property bags and reserved-property extraction.

use crate::node::{Child, Controls, PropMap};
use serde_json::Value;

/// Property names that never reach an element's `props`.
pub const RESERVED_PROPS: [&str; 6] = ["key", "children", "visible", "on", "repeat", "watch"];

/// A reserved property, lifted out of the bag onto the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedProp {
    Key,
    Children,
    Visible,
    On,
    Repeat,
    Watch,
}

impl ReservedProp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "key" => Some(Self::Key),
            "children" => Some(Self::Children),
            "visible" => Some(Self::Visible),
            "on" => Some(Self::On),
            "repeat" => Some(Self::Repeat),
            "watch" => Some(Self::Watch),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Children => "children",
            Self::Visible => "visible",
            Self::On => "on",
            Self::Repeat => "repeat",
            Self::Watch => "watch",
        }
    }

    pub fn is_reserved(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

/// The property bag a caller hands to the factory.
///
/// Holds plain JSON values by name plus the `children` slot, which may carry
/// nodes. Component functions receive the bag unfiltered, reserved entries
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: PropMap,
    children: Option<Child>,
}

/// A bag split into its display props and reserved fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropParts {
    pub props: PropMap,
    pub children: Option<Child>,
    pub key: Option<String>,
    pub controls: Controls,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Append one child (a node, a list, or a placeholder value).
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        let child = child.into();
        self.children = Some(match self.children.take() {
            None => Child::List(vec![child]),
            Some(Child::List(mut list)) => {
                list.push(child);
                Child::List(list)
            }
            Some(single) => Child::List(vec![single, child]),
        });
        self
    }

    /// Replace the children slot.
    pub fn children(mut self, children: impl Into<Child>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn key(self, key: impl Into<String>) -> Self {
        let key: String = key.into();
        self.set("key", key)
    }

    pub fn visible(self, condition: impl Into<Value>) -> Self {
        self.set("visible", condition)
    }

    pub fn on(self, bindings: impl Into<Value>) -> Self {
        self.set("on", bindings)
    }

    pub fn repeat(self, repeat: impl Into<Value>) -> Self {
        self.set("repeat", repeat)
    }

    pub fn watch(self, bindings: impl Into<Value>) -> Self {
        self.set("watch", bindings)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_children(&self) -> Option<&Child> {
        self.children.as_ref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name) || (name == "children" && self.children.is_some())
    }

    /// Number of named values (the children slot is not counted).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Split the bag into display props and reserved fields.
    ///
    /// A `children` entry stored as a plain value is used only when the
    /// children slot itself is empty.
    pub fn into_parts(self) -> PropParts {
        let mut parts = PropParts {
            children: self.children,
            ..PropParts::default()
        };

        for (name, value) in self.values {
            match ReservedProp::from_name(&name) {
                None => {
                    parts.props.insert(name, value);
                }
                Some(ReservedProp::Key) => parts.key = coerce_key(value),
                Some(ReservedProp::Children) => {
                    if parts.children.is_none() {
                        parts.children = Some(Child::Value(value));
                    }
                }
                Some(ReservedProp::Visible) => parts.controls.visible = present(value),
                Some(ReservedProp::On) => parts.controls.on = present(value),
                Some(ReservedProp::Repeat) => parts.controls.repeat = present(value),
                Some(ReservedProp::Watch) => parts.controls.watch = present(value),
            }
        }

        parts
    }
}

impl From<PropMap> for Props {
    fn from(values: PropMap) -> Self {
        Self {
            values,
            children: None,
        }
    }
}

impl From<serde_json::Map<String, Value>> for Props {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(|(k, v)| (k.into(), v)).collect::<PropMap>())
    }
}

/// Explicit keys are strings; `null` means "no key".
fn coerce_key(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn present(value: Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}
