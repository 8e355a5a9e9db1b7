//! Yew rendering for brand glyphs.
//!
//! # Design
//! - Props fold into one [`IconAttributes`] set before the glyph merge runs.
//! - The root `<svg>` carries the caller's `NodeRef`, so it resolves once the
//!   element is mounted and the framework clears it on unmount.
//! - Pointer, focus and keyboard listeners are typed props; anything else is
//!   bound imperatively through the ref.

pub mod tiktok;

use yew::prelude::*;
use yew::virtual_dom::{ApplyAttributeAs, VNode, VTag};

use crate::attributes::IconAttributes;
use crate::glyph::{IconDefinition, SvgElement};

/// Props shared by brand icon components.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Presentation attributes passed through to the root `<svg>`.
    #[prop_or_default]
    pub attrs: IconAttributes,
    /// Additional CSS classes, appended to any `class` in `attrs`.
    #[prop_or_default]
    pub class: Classes,
    /// Shorthand for equal `width` and `height`; explicit `attrs` win.
    #[prop_or_default]
    pub size: Option<AttrValue>,
    /// Reference bound to the mounted root `<svg>`.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Click handler on the root element.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Pointer entering the root element.
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    /// Pointer leaving the root element.
    #[prop_or_default]
    pub onmouseleave: Option<Callback<MouseEvent>>,
    /// Root element gained focus.
    #[prop_or_default]
    pub onfocus: Option<Callback<FocusEvent>>,
    /// Root element lost focus.
    #[prop_or_default]
    pub onblur: Option<Callback<FocusEvent>>,
    /// Key pressed while the root element has focus.
    #[prop_or_default]
    pub onkeydown: Option<Callback<KeyboardEvent>>,
}

impl IconProps {
    /// Fold `size`, `class` and `attrs` into one caller attribute set.
    #[must_use]
    pub fn caller_attributes(&self) -> IconAttributes {
        let mut attributes = self.attrs.clone();
        if let Some(size) = &self.size {
            let size: &str = size.as_ref();
            for axis in ["width", "height"] {
                if !attributes.contains(axis) {
                    attributes.set(axis, size);
                }
            }
        }
        if !self.class.is_empty() {
            let extra = self.class.to_string();
            let class = match attributes.get("class") {
                Some(existing) => format!("{existing} {extra}"),
                None => extra,
            };
            attributes.set("class", class);
        }
        attributes
    }
}

/// Render a glyph with the given props into virtual DOM.
#[must_use]
pub fn icon_svg(definition: &IconDefinition, props: &IconProps) -> Html {
    let element = definition.render(&props.caller_attributes());
    let children: Html = element.children.iter().map(element_node).collect();
    let mut root = html! {
        <svg
            ref={props.node_ref.clone()}
            onclick={props.onclick.clone()}
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
            onfocus={props.onfocus.clone()}
            onblur={props.onblur.clone()}
            onkeydown={props.onkeydown.clone()}
        >
            {children}
        </svg>
    };
    if let VNode::VTag(tag) = &mut root {
        apply_attributes(tag, &element.attributes);
    }
    root
}

fn element_node(element: &SvgElement) -> VNode {
    let mut tag = VTag::new(element.name);
    apply_attributes(&mut tag, &element.attributes);
    for child in &element.children {
        tag.add_child(element_node(child));
    }
    VNode::from(tag)
}

fn apply_attributes(tag: &mut VTag, attributes: &[(String, String)]) {
    let map = tag.attributes.get_mut_index_map();
    for (name, value) in attributes {
        map.insert(
            AttrValue::from(name.clone()),
            (AttrValue::from(value.clone()), ApplyAttributeAs::Attribute),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_fills_missing_dimensions_only() {
        let props = yew::props!(IconProps {
            attrs: IconAttributes::new().with("height", 10),
            size: Some(AttrValue::from("2em")),
        });
        let attributes = props.caller_attributes();
        assert_eq!(attributes.get("width"), Some("2em"));
        assert_eq!(attributes.get("height"), Some("10"));
    }

    #[test]
    fn class_prop_appends_to_attribute_class() {
        let props = yew::props!(IconProps {
            attrs: IconAttributes::new().with("className", "brand"),
            class: classes!("size-6"),
        });
        assert_eq!(props.caller_attributes().get("class"), Some("brand size-6"));

        let bare = yew::props!(IconProps { class: classes!("size-6") });
        assert_eq!(bare.caller_attributes().get("class"), Some("size-6"));
    }

    #[test]
    fn listeners_do_not_leak_into_attributes() {
        let props = yew::props!(IconProps {
            onmouseenter: Some(Callback::from(|_: MouseEvent| ())),
            onfocus: Some(Callback::from(|_: FocusEvent| ())),
            onkeydown: Some(Callback::from(|_: KeyboardEvent| ())),
        });
        assert!(props.caller_attributes().is_empty());
        let VNode::VTag(tag) = icon_svg(&tiktok::TIKTOK, &props) else {
            panic!("icon root should be an element");
        };
        assert_eq!(tag.tag(), "svg");
        assert!(tag.attributes.iter().all(|(name, _)| !name.starts_with("on")));
    }

    #[test]
    fn default_props_add_nothing() {
        let props = yew::props!(IconProps {});
        assert!(props.caller_attributes().is_empty());
    }
}
