//! The element factory.
//!
//! `create_node` is the single entry point: a tag name or the fragment
//! marker builds a node directly, a component tag delegates to the
//! component function.

use crate::component::Component;
use jsonui_core::{Child, Node, NodeKind, Props};
use serde_json::Value;
use tracing::trace;

/// What the factory is asked to build.
#[derive(Debug, Clone)]
pub enum Tag {
    /// An element type name such as `"Card"`
    Name(String),
    /// Transparent grouping of children
    Fragment,
    /// A function component
    Component(Component),
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::Name(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::Name(name)
    }
}

impl From<Component> for Tag {
    fn from(component: Component) -> Self {
        Tag::Component(component)
    }
}

impl From<&Component> for Tag {
    fn from(component: &Component) -> Self {
        Tag::Component(component.clone())
    }
}

/// Build a node from a tag and an optional property bag.
///
/// Component tags receive the full bag, reserved entries included, and
/// their result is returned untouched. Otherwise reserved properties are
/// lifted onto the node and `children` is normalized.
pub fn create_node(tag: impl Into<Tag>, props: Option<Props>) -> Node {
    let props = props.unwrap_or_default();

    match tag.into() {
        Tag::Component(component) => {
            trace!(component = component.name(), "calling function component");
            component.call(props)
        }
        Tag::Name(name) => build_node(NodeKind::Element(name), props),
        Tag::Fragment => build_node(NodeKind::Fragment, props),
    }
}

/// Factory entry point for elements with zero or one child.
///
/// An explicit `key` argument overrides any `key` in the bag.
pub fn jsx(tag: impl Into<Tag>, props: Option<Props>, key: Option<&str>) -> Node {
    let mut node = create_node(tag, props);
    if let Some(key) = key {
        node.key = Some(key.to_string());
    }
    node
}

/// Factory entry point for elements with several static children.
pub fn jsxs(tag: impl Into<Tag>, props: Option<Props>, key: Option<&str>) -> Node {
    jsx(tag, props, key)
}

/// Development-build entry point; identical to [`jsx`].
pub fn jsx_dev(tag: impl Into<Tag>, props: Option<Props>, key: Option<&str>) -> Node {
    jsx(tag, props, key)
}

/// A fragment grouping `children`.
pub fn fragment(children: impl Into<Child>) -> Node {
    create_node(Tag::Fragment, Some(Props::new().children(children)))
}

fn build_node(kind: NodeKind, props: Props) -> Node {
    let parts = props.into_parts();
    let node = Node {
        kind,
        props: parts.props,
        children: normalize_children(parts.children),
        key: parts.key,
        controls: parts.controls,
    };
    trace!(
        kind = ?node.kind,
        children = node.children.len(),
        "created node"
    );
    node
}

/// Flatten a raw children value into an ordered list of nodes.
///
/// Lists and JSON arrays nest to any depth. `null` and booleans are
/// placeholders and vanish, as do other plain values since they cannot
/// become elements.
pub fn normalize_children(raw: Option<Child>) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(raw) = raw {
        collect_children(raw, &mut nodes);
    }
    nodes
}

fn collect_children(child: Child, nodes: &mut Vec<Node>) {
    match child {
        Child::Node(node) => nodes.push(*node),
        Child::List(list) => {
            for item in list {
                collect_children(item, nodes);
            }
        }
        Child::Value(Value::Array(items)) => {
            for item in items {
                collect_children(Child::Value(item), nodes);
            }
        }
        Child::Value(Value::Null | Value::Bool(_)) => {}
        other => {
            trace!(found = other.kind_name(), "dropping non-node child");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::component;
    use jsonui_core::{ActionBinding, Bindings, RepeatSpec};
    use serde_json::json;

    #[test]
    fn test_string_tag_builds_element() {
        let node = jsx("Card", Some(Props::new().set("title", "Hello")), None);
        assert_eq!(node.type_name(), Some("Card"));
        assert_eq!(node.props.len(), 1);
        assert_eq!(node.props["title"], json!("Hello"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_component_tag_resolves_type_name() {
        let card = component("Card");
        let node = jsx(&card, Some(Props::new().set("title", "Hello")), None);
        assert_eq!(node.type_name(), Some("Card"));
        assert_eq!(node.props["title"], json!("Hello"));
    }

    #[test]
    fn test_jsx_dev_matches_jsx() {
        let props = || Some(Props::new().set("title", "Hi"));
        assert_eq!(
            jsx_dev("Card", props(), Some("main")),
            jsx("Card", props(), Some("main"))
        );
    }

    #[test]
    fn test_jsxs_with_children() {
        let text = component("Text");
        let node = jsxs(
            component("Stack"),
            Some(
                Props::new()
                    .child(jsx(&text, Some(Props::new().set("content", "A")), None))
                    .child(jsx(&text, Some(Props::new().set("content", "B")), None)),
            ),
            None,
        );
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].props["content"], json!("B"));
    }

    #[test]
    fn test_key_argument() {
        let node = jsx(component("Card"), Some(Props::new().set("title", "Hi")), Some("my-key"));
        assert_eq!(node.key.as_deref(), Some("my-key"));
        assert_eq!(node.props.len(), 1);
    }

    #[test]
    fn test_key_argument_overrides_bag_key() {
        let node = jsx("Card", Some(Props::new().key("from-bag")), Some("from-arg"));
        assert_eq!(node.key.as_deref(), Some("from-arg"));
    }

    #[test]
    fn test_reserved_props_extracted() {
        let node = jsx(
            component("Button"),
            Some(
                Props::new()
                    .set("label", "Go")
                    .visible(json!({ "$state": "/show" }))
                    .on(Bindings::new().bind("press", ActionBinding::new("submit")))
                    .repeat(RepeatSpec::new("/items"))
                    .watch(Bindings::new().bind("/x", ActionBinding::new("reload"))),
            ),
            None,
        );

        assert_eq!(node.props.len(), 1);
        assert_eq!(node.props["label"], json!("Go"));
        assert_eq!(node.controls.visible, Some(json!({ "$state": "/show" })));
        assert_eq!(node.controls.on, Some(json!({ "press": { "action": "submit" } })));
        assert_eq!(node.controls.repeat, Some(json!({ "statePath": "/items" })));
        assert_eq!(node.controls.watch, Some(json!({ "/x": { "action": "reload" } })));
    }

    #[test]
    fn test_absent_props() {
        let node = jsx("Divider", None, None);
        assert!(node.props.is_empty());
        assert!(node.children.is_empty());
        assert!(node.key.is_none());
        assert!(node.controls.is_empty());
    }

    #[test]
    fn test_placeholder_children_dropped() {
        let node = jsxs(
            "Stack",
            Some(Props::new().children(vec![
                Child::from(json!(null)),
                Child::from(jsx("Text", Some(Props::new().set("content", "A")), None)),
                Child::from(false),
                Child::from(None::<Node>),
                Child::from(true),
            ])),
            None,
        );
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].type_name(), Some("Text"));
    }

    #[test]
    fn test_boolean_children_value() {
        let node = jsx("Stack", Some(Props::new().children(true)), None);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_single_child_normalizes_to_list() {
        let node = jsx("Card", Some(Props::new().children(jsx("Text", None, None))), None);
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_nested_lists_flatten_in_order() {
        let children = Child::from(vec![
            Child::from(jsx("A", None, None)),
            Child::from(vec![
                Child::from(jsx("B", None, None)),
                Child::from(vec![Child::from(false), Child::from(jsx("C", None, None))]),
            ]),
            Child::from(jsx("D", None, None)),
        ]);
        let node = jsx("Stack", Some(Props::new().children(children)), None);
        let types: Vec<_> = node.children.iter().filter_map(Node::type_name).collect();
        assert_eq!(types, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_non_node_values_dropped() {
        let node = jsx(
            "Text",
            Some(Props::new().children(vec![Child::from("hello"), Child::from(json!([1, null]))])),
            None,
        );
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_component_receives_unfiltered_bag() {
        let probe = Component::from_fn("Probe", |props: Props| {
            let mut node = Node::element("Probe");
            for name in ["key", "children", "visible", "on", "repeat", "watch"] {
                node.props.insert(name.to_string(), json!(props.contains(name)));
            }
            node
        });

        let node = create_node(
            &probe,
            Some(
                Props::new()
                    .key("k")
                    .child(jsx("Text", None, None))
                    .visible(true)
                    .on(json!({}))
                    .repeat(json!({}))
                    .watch(json!({})),
            ),
        );

        // returned as-is, reserved names included
        assert!(node.props.values().all(|v| v == &json!(true)));
        assert_eq!(node.props.len(), 6);
        assert!(node.key.is_none());
    }

    #[test]
    fn test_fragment() {
        let node = fragment(vec![jsx("Text", None, None), jsx("Text", None, None)]);
        assert!(node.is_fragment());
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn test_fragment_tag_extracts_key() {
        let node = create_node(Tag::Fragment, Some(Props::new().key("group")));
        assert!(node.is_fragment());
        assert_eq!(node.key.as_deref(), Some("group"));
    }
}
