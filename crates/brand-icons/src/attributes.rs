//! Caller-supplied presentation attributes.
//!
//! # Design
//! - Names are canonicalised on insertion, so `strokeWidth` and `stroke-width`
//!   address the same entry.
//! - Values are stored as text and never validated; the host renderer decides
//!   what a malformed value means.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AttributeError, AttributeResult};

/// SVG attributes whose canonical spelling is camelCase.
const CAMEL_CASE_NATIVE: &[&str] = &[
    "attributeName",
    "baseFrequency",
    "clipPathUnits",
    "filterUnits",
    "gradientTransform",
    "gradientUnits",
    "kernelMatrix",
    "keySplines",
    "keyTimes",
    "lengthAdjust",
    "markerHeight",
    "markerUnits",
    "markerWidth",
    "maskContentUnits",
    "maskUnits",
    "numOctaves",
    "pathLength",
    "patternContentUnits",
    "patternTransform",
    "patternUnits",
    "preserveAspectRatio",
    "primitiveUnits",
    "refX",
    "refY",
    "repeatCount",
    "spreadMethod",
    "startOffset",
    "stdDeviation",
    "tableValues",
    "textLength",
    "viewBox",
];

/// JSX-style names that do not follow the kebab-case rule.
const ALIASES: &[(&str, &str)] = &[
    ("className", "class"),
    ("htmlFor", "for"),
    ("viewbox", "viewBox"),
    ("xmlBase", "xml:base"),
    ("xmlLang", "xml:lang"),
    ("xmlSpace", "xml:space"),
    ("xmlnsXlink", "xmlns:xlink"),
];

/// Return the SVG spelling of an attribute name.
///
/// `strokeLinejoin` becomes `stroke-linejoin`, `className` becomes `class`,
/// `xlinkHref` becomes `xlink:href`; natively camelCase attributes such as
/// `viewBox` are left alone. Event handler names collapse to the DOM form, so
/// `onMouseEnter` becomes `onmouseenter`.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    if let Some((_, alias)) = ALIASES.iter().find(|(from, _)| *from == name) {
        return (*alias).to_string();
    }
    if CAMEL_CASE_NATIVE.contains(&name) || !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return name.to_string();
    }
    if let Some(rest) = name.strip_prefix("on")
        && rest.starts_with(|c: char| c.is_ascii_uppercase())
    {
        return name.to_ascii_lowercase();
    }
    if let Some(rest) = name.strip_prefix("xlink")
        && rest.starts_with(|c: char| c.is_ascii_uppercase())
    {
        return format!("xlink:{}", kebab_case(rest));
    }
    kebab_case(name)
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, ch) in name.char_indices() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Open-ended mapping of presentation attributes applied to an icon root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Value>",
    into = "BTreeMap<String, String>"
)]
pub struct IconAttributes {
    entries: BTreeMap<String, String>,
}

impl IconAttributes {
    /// Empty attribute set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace an attribute, returning the previous value.
    pub fn set(&mut self, name: &str, value: impl Display) -> Option<String> {
        self.entries
            .insert(canonical_name(name), value.to_string())
    }

    /// Look up an attribute by any accepted spelling.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&canonical_name(name)).map(String::as_str)
    }

    /// Whether the attribute is present under any accepted spelling.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical_name(name))
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&canonical_name(name))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate canonical `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Parse a JSON object of scalar values.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Json`] when the payload is not a JSON object,
    /// [`AttributeError::UnsupportedValue`] for `null`, array or object values
    /// and [`AttributeError::EmptyName`] for an empty key.
    pub fn from_json(payload: &str) -> AttributeResult<Self> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(payload)?;
        Self::try_from(raw)
    }
}

impl TryFrom<BTreeMap<String, Value>> for IconAttributes {
    type Error = AttributeError;

    fn try_from(raw: BTreeMap<String, Value>) -> AttributeResult<Self> {
        let mut attributes = Self::new();
        for (name, value) in raw {
            if name.is_empty() {
                return Err(AttributeError::EmptyName);
            }
            let text = scalar_text(&name, value)?;
            attributes.set(&name, text);
        }
        Ok(attributes)
    }
}

impl From<IconAttributes> for BTreeMap<String, String> {
    fn from(attributes: IconAttributes) -> Self {
        attributes.entries
    }
}

impl<K, V> FromIterator<(K, V)> for IconAttributes
where
    K: AsRef<str>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name.as_ref(), value);
        }
        attributes
    }
}

fn scalar_text(name: &str, value: Value) -> AttributeResult<String> {
    let kind = match value {
        Value::String(text) => return Ok(text),
        Value::Number(number) => return Ok(number.to_string()),
        Value::Bool(flag) => return Ok(flag.to_string()),
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    Err(AttributeError::UnsupportedValue {
        name: name.to_string(),
        kind,
    })
}
