//! Function components: `Props -> Node` values usable as factory tags.

use crate::factory::{create_node, Tag};
use jsonui_core::{Node, Props};
use std::fmt;
use std::sync::Arc;

type RenderFn = dyn Fn(Props) -> Node + Send + Sync;

/// A named function from a property bag to a node.
///
/// When used as a tag the factory calls it once with the unfiltered bag and
/// returns whatever it produces. Cloning shares the underlying function.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    render: Arc<RenderFn>,
}

impl Component {
    /// Wrap an arbitrary function as a component.
    pub fn from_fn<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(Props) -> Node + Send + Sync + 'static,
    {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            render: Arc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the component with a property bag.
    pub fn call(&self, props: Props) -> Node {
        (self.render)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A component that produces a `type_name` element from its props, the
/// building block for a component library:
///
/// ```
/// use jsonui_factory::{component, jsx};
/// use jsonui_core::Props;
///
/// let card = component("Card");
/// let node = jsx(&card, Some(Props::new().set("title", "Hello")), None);
/// assert_eq!(node.type_name(), Some("Card"));
/// ```
pub fn component(type_name: impl Into<String>) -> Component {
    let type_name: String = type_name.into();
    let tag = type_name.clone();
    Component::from_fn(type_name, move |props| {
        create_node(Tag::Name(tag.clone()), Some(props))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_builds_named_element() {
        let card = component("Card");
        let node = card.call(Props::new().set("title", "Hello").key("main"));

        assert_eq!(card.name(), "Card");
        assert_eq!(node.type_name(), Some("Card"));
        assert_eq!(node.props["title"], json!("Hello"));
        assert_eq!(node.key.as_deref(), Some("main"));
        assert!(!node.props.contains_key("key"));
    }

    #[test]
    fn test_from_fn_composite() {
        let labelled = Component::from_fn("Labelled", |props: Props| {
            let label = props.get("label").cloned().unwrap_or(json!(""));
            create_node(
                "Stack",
                Some(Props::new().child(create_node(
                    "Text",
                    Some(Props::new().set("content", label)),
                ))),
            )
        });

        let node = labelled.call(Props::new().set("label", "Name"));
        assert_eq!(node.type_name(), Some("Stack"));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].props["content"], json!("Name"));
    }

    #[test]
    fn test_clone_shares_function() {
        let text = component("Text");
        let copy = text.clone();
        assert_eq!(copy.name(), "Text");
        assert_eq!(copy.call(Props::new()).type_name(), Some("Text"));
        assert!(format!("{:?}", copy).contains("Text"));
    }
}
