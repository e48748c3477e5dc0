//! Component registry for looking up components by name.

use crate::component::{component, Component};
use crate::factory::create_node;
use jsonui_core::{Node, Props};
use std::collections::HashMap;

/// A registry of components, keyed by component name.
///
/// Useful when the tree is described by data (names and bags) rather than
/// Rust code.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Component>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// A registry holding a plain element component for each name.
    pub fn intrinsics(names: &[&str]) -> Self {
        let mut registry = Self::new();
        for name in names {
            registry.register(component(*name));
        }
        registry
    }

    /// Register a component under its own name, replacing any previous one.
    pub fn register(&mut self, component: Component) {
        self.components.insert(component.name().to_string(), component);
    }

    /// Get a component by name.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// Check if a component exists.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Get all component names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|s| s.as_str())
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Build a node by component name.
    ///
    /// Unregistered names build a plain element of that type.
    pub fn create(&self, name: &str, props: Option<Props>) -> Node {
        match self.get(name) {
            Some(component) => create_node(component, props),
            None => create_node(name, props),
        }
    }
}
