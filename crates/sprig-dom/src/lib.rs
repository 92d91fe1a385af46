//! Live element tree model and property application.
//!
//! An `Element` carries a tag, an insertion-ordered attribute list, an
//! insertion-ordered typed property list, and children. Class list, inline
//! style, and dataset are projections over the attribute list, so a
//! `data-*` attribute and its dataset entry are one store.

use core::fmt;
use sprig_core::camel_case_key;
use sprig_core::kebab_case_key;
use sprig_style::InlineStyle;

/// Child node of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    LineBreak,
}

/// Value carried by a property-bag entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(PropBag),
}

impl PropValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for PropValue {
    /// Best-effort string coercion for attribute values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
                    write!(f, "{value:.0}")
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Str(value) => f.write_str(value),
            Self::Map(bag) => {
                for (index, (key, value)) in bag.entries().iter().enumerate() {
                    if index > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<PropBag> for PropValue {
    fn from(value: PropBag) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

/// Insertion-ordered mapping of property-bag keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropBag {
    entries: Vec<(String, PropValue)>,
}

impl PropBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a key; an existing key keeps its position.
    pub fn set(&mut self, key: &str, value: impl Into<PropValue>) {
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
        {
            Some((_, existing_value)) => *existing_value = value,
            None => self.entries.push((key.to_owned(), value)),
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn entries(&self) -> &[(String, PropValue)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, PropValue)> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Live element node produced by the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    props: Vec<(String, PropValue)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with a lowercase-normalized tag.
    ///
    /// An empty tag degrades to the generic container tag instead of
    /// erroring.
    pub fn new(tag: &str) -> Self {
        let tag = tag.trim();
        Self {
            tag: if tag.is_empty() {
                "div".to_owned()
            } else {
                tag.to_ascii_lowercase()
            },
            attrs: Vec::new(),
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Upserts an attribute; an existing attribute keeps its position.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self
            .attrs
            .iter_mut()
            .find(|(existing, _)| existing == name)
        {
            Some((_, existing_value)) => *existing_value = value.to_owned(),
            None => self.attrs.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn set_id(&mut self, id: &str) {
        self.set_attribute("id", id);
    }

    /// Adds one class token; duplicates are ignored.
    pub fn add_class(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.has_class(name) {
            return;
        }

        let class = match self.attribute("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {name}"),
            _ => name.to_owned(),
        };
        self.set_attribute("class", &class);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes().any(|class| class == name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .into_iter()
            .flat_map(str::split_whitespace)
    }

    /// Inline style parsed from the `style` attribute.
    pub fn style(&self) -> InlineStyle {
        InlineStyle::from_text(self.attribute("style").unwrap_or(""))
    }

    /// Appends a raw style-text fragment (`;`-separator heuristic).
    pub fn append_style_text(&mut self, fragment: &str) {
        let mut style = self.style();
        style.append_text(fragment);
        if !style.css_text().is_empty() {
            let text = style.css_text().to_owned();
            self.set_attribute("style", &text);
        }
    }

    /// Upserts one style declaration without clobbering unrelated ones.
    pub fn set_style_declaration(&mut self, name: &str, value: &str) {
        let mut style = self.style();
        style.set(name, value);
        if !style.css_text().is_empty() {
            let text = style.css_text().to_owned();
            self.set_attribute("style", &text);
        }
    }

    /// Writes a dataset entry; the key is camel-cased, the store is the
    /// corresponding `data-*` attribute.
    pub fn dataset_set(&mut self, key: &str, value: &str) {
        let name = format!("data-{}", kebab_case_key(key));
        self.set_attribute(&name, value);
    }

    pub fn dataset_get(&self, key: &str) -> Option<&str> {
        let name = format!("data-{}", kebab_case_key(key));
        self.attribute(&name)
    }

    /// Camel-cased view of all `data-*` attributes.
    pub fn dataset(&self) -> Vec<(String, String)> {
        self.attrs
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix("data-")
                    .map(|rest| (camel_case_key(rest), value.clone()))
            })
            .collect()
    }

    /// Direct typed property assignment; an existing key keeps its position.
    pub fn set_property(&mut self, key: &str, value: PropValue) {
        match self
            .props
            .iter_mut()
            .find(|(existing, _)| existing == key)
        {
            Some((_, existing_value)) => *existing_value = value,
            None => self.props.push((key.to_owned(), value)),
        }
    }

    pub fn property(&self, key: &str) -> Option<&PropValue> {
        self.props
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn properties(&self) -> &[(String, PropValue)] {
        &self.props
    }

    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of the subtree; line breaks render as `\n`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&mut out, &self.children);
        out
    }

    /// Applies one property bag, classifying each key in insertion order.
    ///
    /// Classification priority: `style`, `dataset`, `id`,
    /// `class`/`className`, `data-*`, `aria-*`, settable element property,
    /// fallback generic attribute. Null values are skipped throughout.
    pub fn apply_bag(&mut self, bag: PropBag) {
        for (key, value) in bag.into_entries() {
            if value.is_null() {
                continue;
            }

            if key == "style" {
                match value {
                    PropValue::Str(text) => self.append_style_text(&text),
                    PropValue::Map(map) => {
                        for (name, entry) in map.into_entries() {
                            if entry.is_null() {
                                continue;
                            }
                            self.set_style_declaration(&name, &entry.to_string());
                        }
                    }
                    // Scalar style values have no defined meaning; skip.
                    _ => {}
                }
                continue;
            }

            if key == "dataset" {
                if let PropValue::Map(map) = value {
                    for (name, entry) in map.into_entries() {
                        if entry.is_null() {
                            continue;
                        }
                        self.dataset_set(&camel_case_key(&name), &entry.to_string());
                    }
                }
                continue;
            }

            if key == "id" {
                self.set_id(&value.to_string());
                continue;
            }

            if key == "class" || key == "className" {
                let tokens = value.to_string();
                for token in tokens.split_whitespace() {
                    self.add_class(token);
                }
                continue;
            }

            if let Some(rest) = key.strip_prefix("data-") {
                self.dataset_set(&camel_case_key(rest), &value.to_string());
                continue;
            }

            if key.starts_with("aria-") {
                self.set_attribute(&key, &value.to_string());
                continue;
            }

            if is_settable_property(&self.tag, &key) {
                self.set_property(&key, value);
                continue;
            }

            self.set_attribute(&key, &value.to_string());
        }
    }
}

fn collect_text(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::LineBreak => out.push('\n'),
            Node::Element(element) => collect_text(out, element.children()),
        }
    }
}

/// Properties settable on every element.
const GLOBAL_PROPERTIES: &[&str] = &[
    "accessKey",
    "autocapitalize",
    "contentEditable",
    "dir",
    "draggable",
    "hidden",
    "lang",
    "slot",
    "spellcheck",
    "tabIndex",
    "title",
    "translate",
];

const FORM_PROPERTIES: &[&str] = &[
    "action",
    "autocomplete",
    "autofocus",
    "checked",
    "cols",
    "disabled",
    "enctype",
    "max",
    "maxLength",
    "method",
    "min",
    "minLength",
    "multiple",
    "name",
    "pattern",
    "placeholder",
    "readOnly",
    "required",
    "rows",
    "size",
    "step",
    "type",
    "value",
];

const MEDIA_PROPERTIES: &[&str] = &[
    "alt", "autoplay", "controls", "height", "loop", "muted", "poster", "preload", "src", "width",
];

const ANCHOR_PROPERTIES: &[&str] = &["download", "href", "hreflang", "rel", "target", "type"];

fn tag_properties(tag: &str) -> &'static [&'static str] {
    match tag {
        "button" | "fieldset" | "form" | "input" | "optgroup" | "option" | "output" | "select"
        | "textarea" => FORM_PROPERTIES,
        "audio" | "img" | "source" | "track" | "video" => MEDIA_PROPERTIES,
        "a" | "area" => ANCHOR_PROPERTIES,
        _ => &[],
    }
}

/// Membership test for direct property assignment: a fixed table of
/// settable property names per tag category.
pub fn is_settable_property(tag: &str, key: &str) -> bool {
    GLOBAL_PROPERTIES.contains(&key) || tag_properties(tag).contains(&key)
}
