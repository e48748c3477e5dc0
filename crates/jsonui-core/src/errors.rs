//! Error types for jsonui.

use crate::validate::Issue;
use thiserror::Error;

/// Top-level error type for jsonui.
#[derive(Debug, Error)]
pub enum JsonUiError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

/// Errors raised while flattening a node tree into a [`Spec`](crate::Spec).
///
/// Every variant aborts the whole render call; no partial document is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("render() expects a node produced by the factory, found {found}")]
    InvalidInput { found: &'static str },

    #[error("render() requires a single root element; fragments cannot be used at the root level")]
    InvalidRoot,

    #[error("Duplicate element key \"{key}\"; keys must be unique within a single render() call")]
    DuplicateKey { key: String },
}

/// Errors while encoding, decoding or checking a Spec document.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Spec JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spec is structurally invalid: {}", .issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid { issues: Vec<Issue> },
}
