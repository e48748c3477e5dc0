//! Core types for jsonui.
//!
//! This crate provides the types shared by the factory and the renderer:
//! - The intermediate node tree and raw property bags
//! - The flat Spec document and its elements
//! - Builders for the opaque control values (bindings, repeat, conditions)
//! - Error types and Spec validation

pub mod bindings;
pub mod errors;
pub mod node;
pub mod props;
pub mod spec;
pub mod validate;

pub use bindings::*;
pub use errors::*;
pub use node::*;
pub use props::*;
pub use spec::*;
pub use validate::*;
