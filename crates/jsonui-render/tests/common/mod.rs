//! Component library shared by the integration tests.

#![allow(dead_code)]

use jsonui_core::{Child, Node, Props};
use jsonui_factory::{component, create_node, fragment};

macro_rules! components {
    ($($fn_name:ident => $type_name:literal),* $(,)?) => {
        $(
            pub fn $fn_name(props: Props) -> Node {
                create_node(component($type_name), Some(props))
            }
        )*
    };
}

components! {
    stack => "Stack",
    card => "Card",
    text => "Text",
    button => "Button",
    badge => "Badge",
    list => "List",
    list_item => "ListItem",
    select => "Select",
    input => "Input",
    divider => "Divider",
}

/// Group children without producing an element.
pub fn group(children: Vec<Node>) -> Node {
    fragment(Child::from(children))
}

/// Property bag holding only children.
pub fn with_children(children: Vec<Node>) -> Props {
    Props::new().children(children)
}
