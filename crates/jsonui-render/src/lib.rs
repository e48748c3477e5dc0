//! Flattening of jsonui node trees into Spec documents.
//!
//! `render` walks a single root node depth-first and produces a flat
//! [`Spec`]: every concrete node becomes one keyed [`UIElement`], fragments
//! are spliced into their parent, and reserved control fields stay out of
//! `props`.
//!
//! # Example
//!
//! ```
//! use jsonui_core::Props;
//! use jsonui_factory::{component, jsx};
//! use jsonui_render::{render, RenderOptions};
//!
//! let card = component("Card");
//! let text = component("Text");
//! let tree = jsx(
//!     &card,
//!     Some(Props::new().set("title", "Hello").child(jsx(&text, None, None))),
//!     None,
//! );
//!
//! let spec = render(tree, &RenderOptions::default()).unwrap();
//! assert_eq!(spec.root, "card-1");
//! assert_eq!(spec.get("card-1").unwrap().child_keys(), ["text-1"]);
//! ```
//!
//! [`UIElement`]: jsonui_core::UIElement

mod flatten;
mod options;

pub use options::RenderOptions;

use flatten::Flattener;
use jsonui_core::{Child, RenderError, Spec};
use tracing::debug;

/// Flatten a root node into a [`Spec`].
///
/// Fails with [`RenderError::InvalidInput`] when `root` is not a node,
/// [`RenderError::InvalidRoot`] when it is a fragment and
/// [`RenderError::DuplicateKey`] when two elements resolve to the same key.
/// A `null` state is treated as no state.
pub fn render(root: impl Into<Child>, options: &RenderOptions) -> Result<Spec, RenderError> {
    let root = root.into();
    let found = root.kind_name();
    let node = root
        .into_node()
        .ok_or(RenderError::InvalidInput { found })?;

    debug!(root = ?node.kind, "rendering node tree");

    let mut flattener = Flattener::new();
    let root_key = flattener.flatten(node)?;
    let elements = flattener.into_elements();

    debug!(root = %root_key, elements = elements.len(), "rendered spec");

    Ok(Spec {
        root: root_key,
        elements,
        state: options.state.clone().filter(|state| !state.is_null()),
    })
}
