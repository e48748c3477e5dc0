//! Intermediate node tree produced by the factory and consumed by the renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display properties of a node or element, keyed by property name.
pub type PropMap = IndexMap<String, Value>;

/// What a node is: a concrete element with a type name, or a transparent
/// fragment that only groups its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element(String),
    Fragment,
}

impl NodeKind {
    pub fn element(type_name: impl Into<String>) -> Self {
        Self::Element(type_name.into())
    }
}

/// Control metadata carried next to the display props.
///
/// None of these values are interpreted here; they are copied verbatim into
/// the output document and skipped entirely when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    /// Visibility condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<Value>,
    /// Event name to action binding(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<Value>,
    /// List repetition binding (`{statePath, key?}`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Value>,
    /// State path to action binding(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<Value>,
}

impl Controls {
    /// True when no control field is set.
    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.on.is_none() && self.repeat.is_none() && self.watch.is_none()
    }
}

/// A node in the intermediate tree.
///
/// `props` never contains a reserved property; those live on `key`,
/// `children` and `controls`. A node owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub props: PropMap,
    pub children: Vec<Node>,
    /// Explicit element key (overrides auto-generation)
    pub key: Option<String>,
    pub controls: Controls,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: PropMap::new(),
            children: Vec::new(),
            key: None,
            controls: Controls::default(),
        }
    }

    /// Create an empty element node.
    pub fn element(type_name: impl Into<String>) -> Self {
        Self::new(NodeKind::element(type_name))
    }

    /// Create an empty fragment node.
    pub fn fragment() -> Self {
        Self::new(NodeKind::Fragment)
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.kind, NodeKind::Fragment)
    }

    /// The element type name, `None` for fragments.
    pub fn type_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(name) => Some(name.as_str()),
            NodeKind::Fragment => None,
        }
    }

    /// Number of non-fragment nodes in this subtree, i.e. the number of
    /// elements it flattens to.
    pub fn concrete_count(&self) -> usize {
        let own = usize::from(!self.is_fragment());
        own + self.children.iter().map(Node::concrete_count).sum::<usize>()
    }
}

/// Anything that can appear as a child, or be handed to the renderer.
///
/// Only [`Child::Node`] is a genuine node. Lists nest arbitrarily; plain
/// values (`null`, booleans, strings, ...) are placeholders that never
/// become elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Box<Node>),
    List(Vec<Child>),
    Value(Value),
}

impl Child {
    /// Short name of what this value is, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Child::Node(_) => "node",
            Child::List(_) => "list",
            Child::Value(Value::Null) => "null",
            Child::Value(Value::Bool(_)) => "boolean",
            Child::Value(Value::Number(_)) => "number",
            Child::Value(Value::String(_)) => "string",
            Child::Value(Value::Array(_)) => "array",
            Child::Value(Value::Object(_)) => "object",
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(&**node),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            Child::Node(node) => Some(*node),
            _ => None,
        }
    }

    /// True for values that conditional-inclusion idioms leave behind
    /// (`null` and booleans).
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Child::Value(Value::Null | Value::Bool(_)))
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(Box::new(node))
    }
}

impl From<Vec<Node>> for Child {
    fn from(nodes: Vec<Node>) -> Self {
        Child::List(nodes.into_iter().map(Child::from).collect())
    }
}

impl From<Vec<Child>> for Child {
    fn from(children: Vec<Child>) -> Self {
        Child::List(children)
    }
}

impl From<Option<Node>> for Child {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Child::Value(Value::Null), Child::from)
    }
}

impl From<bool> for Child {
    fn from(flag: bool) -> Self {
        Child::Value(Value::Bool(flag))
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Value(Value::String(text.to_string()))
    }
}

impl From<Value> for Child {
    fn from(value: Value) -> Self {
        Child::Value(value)
    }
}
