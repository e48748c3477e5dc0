//! Structural validation of Spec documents.

use crate::props::ReservedProp;
use crate::spec::Spec;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Which optional checks to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Report elements that cannot be reached from the root.
    pub check_orphans: bool,
}

impl ValidateOptions {
    pub fn with_orphans(mut self) -> Self {
        self.check_orphans = true;
        self
    }
}

/// A single structural problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("spec has no elements")]
    EmptySpec,

    #[error("root key \"{root}\" is not an element")]
    MissingRoot { root: String },

    #[error("element \"{key}\" references missing child \"{child}\"")]
    MissingChild { key: String, child: String },

    #[error("element \"{key}\" has an empty children list")]
    EmptyChildren { key: String },

    #[error("element \"{key}\" carries reserved field \"{}\" inside props", .prop.as_str())]
    ReservedInProps { key: String, prop: ReservedProp },

    #[error("element \"{key}\" is not reachable from the root")]
    Orphaned { key: String },
}

impl Issue {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::EmptySpec => "empty_spec",
            Issue::MissingRoot { .. } => "missing_root",
            Issue::MissingChild { .. } => "missing_child",
            Issue::EmptyChildren { .. } => "empty_children",
            Issue::ReservedInProps { prop, .. } => match prop {
                ReservedProp::Key => "key_in_props",
                ReservedProp::Children => "children_in_props",
                ReservedProp::Visible => "visible_in_props",
                ReservedProp::On => "on_in_props",
                ReservedProp::Repeat => "repeat_in_props",
                ReservedProp::Watch => "watch_in_props",
            },
            Issue::Orphaned { .. } => "orphaned_element",
        }
    }
}

/// Result of validating a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    issues: Vec<Issue>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// True if any issue has the given code.
    pub fn has(&self, code: &str) -> bool {
        self.issues.iter().any(|issue| issue.code() == code)
    }
}

pub(crate) fn validate_spec(spec: &Spec, options: &ValidateOptions) -> Validation {
    let mut issues = Vec::new();

    if spec.elements.is_empty() {
        issues.push(Issue::EmptySpec);
        return Validation { issues };
    }

    if !spec.elements.contains_key(&spec.root) {
        issues.push(Issue::MissingRoot {
            root: spec.root.clone(),
        });
    }

    for (key, element) in &spec.elements {
        if let Some(children) = &element.children {
            if children.is_empty() {
                issues.push(Issue::EmptyChildren { key: key.clone() });
            }
            for child in children {
                if !spec.elements.contains_key(child) {
                    issues.push(Issue::MissingChild {
                        key: key.clone(),
                        child: child.clone(),
                    });
                }
            }
        }

        for name in element.props.keys() {
            if let Some(prop) = ReservedProp::from_name(name) {
                issues.push(Issue::ReservedInProps {
                    key: key.clone(),
                    prop,
                });
            }
        }
    }

    if options.check_orphans {
        let reachable = reachable_from_root(spec);
        for key in spec.elements.keys() {
            if !reachable.contains(key.as_str()) {
                issues.push(Issue::Orphaned { key: key.clone() });
            }
        }
    }

    Validation { issues }
}

fn reachable_from_root(spec: &Spec) -> HashSet<&str> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();

    if spec.elements.contains_key(&spec.root) {
        queue.push_back(spec.root.as_str());
    }

    while let Some(key) = queue.pop_front() {
        if !seen.insert(key) {
            continue;
        }
        if let Some(element) = spec.elements.get(key) {
            for child in element.child_keys() {
                if spec.elements.contains_key(child) {
                    queue.push_back(child.as_str());
                }
            }
        }
    }

    seen
}
