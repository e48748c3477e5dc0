//! Depth-first flattening of a node tree into keyed elements.
//!
//! Keys are assigned in pre-order: a node claims its key before any of its
//! descendants, so among two colliding keys the one later in source order
//! is reported. Elements are inserted once their children are done.

use indexmap::IndexMap;
use jsonui_core::{Node, NodeKind, RenderError, UIElement};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Bookkeeping for one render call. Never reused across calls.
pub(crate) struct Flattener {
    /// Lowercased type name to number of keys generated so far
    counters: HashMap<String, usize>,
    used_keys: HashSet<String>,
    elements: IndexMap<String, UIElement>,
}

impl Flattener {
    pub(crate) fn new() -> Self {
        Self {
            counters: HashMap::new(),
            used_keys: HashSet::new(),
            elements: IndexMap::new(),
        }
    }

    /// Flatten `node` and its subtree, returning the key assigned to it.
    pub(crate) fn flatten(&mut self, node: Node) -> Result<String, RenderError> {
        let Node {
            kind,
            props,
            children,
            key,
            controls,
        } = node;

        // Children are expanded before recursion, so only a root can be a
        // fragment here.
        let type_name = match kind {
            NodeKind::Element(name) => name,
            NodeKind::Fragment => return Err(RenderError::InvalidRoot),
        };

        let key = match key {
            Some(key) => key,
            None => self.generate_key(&type_name),
        };
        if !self.used_keys.insert(key.clone()) {
            return Err(RenderError::DuplicateKey { key });
        }
        trace!(key = %key, element_type = %type_name, "assigned key");

        let mut child_keys = Vec::new();
        for child in expand_fragments(children) {
            child_keys.push(self.flatten(child)?);
        }

        let element = UIElement {
            type_name,
            props,
            children: (!child_keys.is_empty()).then_some(child_keys),
            controls,
        };
        self.elements.insert(key.clone(), element);

        Ok(key)
    }

    pub(crate) fn into_elements(self) -> IndexMap<String, UIElement> {
        self.elements
    }

    /// `{lowercase-type}-{n}`, counting from 1 per lowercased type.
    fn generate_key(&mut self, type_name: &str) -> String {
        let base = type_name.to_lowercase();
        let count = self.counters.entry(base.clone()).or_insert(0);
        *count += 1;
        format!("{}-{}", base, count)
    }
}

/// Replace every fragment child by its own (expanded) children, in place.
fn expand_fragments(children: Vec<Node>) -> Vec<Node> {
    let mut concrete = Vec::with_capacity(children.len());
    splice_fragments(children, &mut concrete);
    concrete
}

fn splice_fragments(children: Vec<Node>, concrete: &mut Vec<Node>) {
    for child in children {
        if child.is_fragment() {
            splice_fragments(child.children, concrete);
        } else {
            concrete.push(child);
        }
    }
}
