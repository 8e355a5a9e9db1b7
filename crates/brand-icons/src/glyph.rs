//! Framework-free description of an icon's vector tree.
//!
//! # Design
//! - Caller attributes are laid down first, the glyph's frozen root
//!   presentation is written over them last.
//! - Child geometry is fixed and never sees caller input.
//! - The same tree feeds the Yew renderer and the static markup writer.

use tracing::debug;

use crate::attributes::IconAttributes;

/// SVG namespace written on every icon root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Static description of a child element inside a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementSpec {
    /// Element tag.
    pub name: &'static str,
    /// Attributes in emission order.
    pub attributes: &'static [(&'static str, &'static str)],
}

/// Static description of a brand glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconDefinition {
    /// Human-readable glyph name, used in log events.
    pub name: &'static str,
    /// Root presentation applied after caller attributes.
    pub frozen: &'static [(&'static str, &'static str)],
    /// Fixed child geometry.
    pub children: &'static [ElementSpec],
}

impl IconDefinition {
    /// Merge caller attributes with the glyph and produce the root element.
    #[must_use]
    pub fn render(&self, caller: &IconAttributes) -> SvgElement {
        let mut root = SvgElement::new("svg");
        for (name, value) in caller.iter() {
            root.set(name, value);
        }
        for (name, value) in self.frozen {
            if let Some(previous) = root.set(name, value)
                && previous != *value
            {
                debug!(
                    icon = self.name,
                    attribute = *name,
                    ignored = %previous,
                    "caller attribute overridden by fixed icon presentation"
                );
            }
        }
        root.children = self
            .children
            .iter()
            .map(|spec| {
                let mut child = SvgElement::new(spec.name);
                for (name, value) in spec.attributes {
                    child.set(name, value);
                }
                child
            })
            .collect();
        root
    }
}

/// Rendered vector element with ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgElement {
    /// Element tag.
    pub name: &'static str,
    /// Attributes in emission order; names are unique.
    pub attributes: Vec<(String, String)>,
    /// Child elements.
    pub children: Vec<Self>,
}

impl SvgElement {
    /// Element without attributes or children.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Write an attribute, keeping its original position when it already
    /// exists. Returns the replaced value.
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(slot) = self.attributes.iter_mut().find(|(key, _)| key == name) {
            return Some(std::mem::replace(&mut slot.1, value.to_string()));
        }
        self.attributes.push((name.to_string(), value.to_string()));
        None
    }

    /// Attribute value by exact name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Serialise the tree as SVG markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOT: IconDefinition = IconDefinition {
        name: "dot",
        frozen: &[("fill", "red"), ("viewBox", "0 0 2 2")],
        children: &[ElementSpec {
            name: "circle",
            attributes: &[("cx", "1"), ("cy", "1"), ("r", "1")],
        }],
    };

    #[test]
    fn frozen_attributes_win_over_caller_values() {
        let caller = IconAttributes::new().with("fill", "blue").with("width", 8);
        let root = DOT.render(&caller);
        assert_eq!(root.attribute("fill"), Some("red"));
        assert_eq!(root.attribute("width"), Some("8"));
        assert_eq!(root.attribute("viewBox"), Some("0 0 2 2"));
    }

    #[test]
    fn overridden_attributes_keep_caller_position() {
        let caller = IconAttributes::new().with("fill", "blue").with("width", 8);
        let root = DOT.render(&caller);
        let names: Vec<&str> = root.attributes.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["fill", "width", "viewBox"]);
    }

    #[test]
    fn children_follow_the_definition() {
        let root = DOT.render(&IconAttributes::new().with("r", 9));
        assert_eq!(root.children.len(), 1);
        let circle = &root.children[0];
        assert_eq!(circle.name, "circle");
        assert_eq!(circle.attribute("r"), Some("1"));
        assert!(circle.children.is_empty());
    }

    #[test]
    fn markup_escapes_attribute_values() {
        let root = DOT.render(&IconAttributes::new().with("aria-label", "a \"b\" & <c>"));
        assert_eq!(
            root.to_markup(),
            "<svg aria-label=\"a &quot;b&quot; &amp; &lt;c&gt;\" fill=\"red\" viewBox=\"0 0 2 2\">\
             <circle cx=\"1\" cy=\"1\" r=\"1\"/></svg>"
        );
    }

    #[test]
    fn empty_elements_self_close() {
        assert_eq!(SvgElement::new("g").to_markup(), "<g/>");
    }
}
