//! Node construction for jsonui trees.
//!
//! This crate handles:
//! - The element factory (`create_node`, `jsx`, `jsxs`, `jsx_dev`, `fragment`)
//! - Reserved property extraction and children normalization
//! - Function components and a name-based component registry

mod component;
mod factory;
mod registry;

pub use component::{component, Component};
pub use factory::{create_node, fragment, jsx, jsx_dev, jsxs, normalize_children, Tag};
pub use registry::ComponentRegistry;
