//! The flat output document handed to renderers.

use crate::errors::SpecError;
use crate::node::{Controls, PropMap};
use crate::validate::{validate_spec, ValidateOptions, Validation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a [`Spec`]'s element map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIElement {
    /// Component type name (never a fragment)
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub props: PropMap,
    /// Keys of the concrete children; absent for leaves, never empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    #[serde(flatten)]
    pub controls: Controls,
}

impl UIElement {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            props: PropMap::new(),
            children: None,
            controls: Controls::default(),
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Child keys in order, empty for leaves.
    pub fn child_keys(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A flat declarative UI document: a root key plus every element by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub root: String,
    pub elements: IndexMap<String, UIElement>,
    /// Initial renderer state, only present when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl Spec {
    /// Create a document with a root key and no elements yet.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            elements: IndexMap::new(),
            state: None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&UIElement> {
        self.elements.get(key)
    }

    pub fn root_element(&self) -> Option<&UIElement> {
        self.elements.get(&self.root)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Check structural integrity (root, child references, reserved fields).
    pub fn validate(&self, options: &ValidateOptions) -> Validation {
        validate_spec(self, options)
    }

    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a document and reject it if it is structurally invalid.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let spec: Spec = serde_json::from_str(json)?;
        let validation = spec.validate(&ValidateOptions::default());
        if validation.is_valid() {
            Ok(spec)
        } else {
            Err(SpecError::Invalid {
                issues: validation.into_issues(),
            })
        }
    }
}
