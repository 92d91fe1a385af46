//! Markup assembly for built elements.
//!
//! Attribute values are quote-escaped so emitted tags stay well formed.
//! Text content and child markup are inlined verbatim, never escaped:
//! callers pre-escape untrusted text. That trade-off is part of the
//! contract, not an omission.

use sprig_core::camel_case_key;
use sprig_core::kebab_case_key;
use sprig_dom::Element;
use sprig_dom::Node;
use sprig_dom::PropBag;
use sprig_dom::PropValue;
use sprig_style::InlineStyle;

/// Escapes a value for attribute position: `&` and `"` only.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializes a live element to its markup representation.
pub fn element_markup(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag());

    // id, class, and style render first; everything else keeps the order
    // it was first set in.
    for name in ["id", "class", "style"] {
        if let Some(value) = element.attribute(name) {
            write_attribute(out, name, value);
        }
    }
    for (name, value) in element.attributes() {
        if matches!(name.as_str(), "id" | "class" | "style") {
            continue;
        }
        write_attribute(out, name, value);
    }
    for (name, value) in element.properties() {
        let attr_name = name.to_ascii_lowercase();
        if element.attribute(&attr_name).is_some() {
            continue;
        }
        write_attribute(out, &attr_name, &value.to_string());
    }

    out.push('>');
    for child in element.children() {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::LineBreak => out.push_str("<br>"),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

/// Accumulator for a markup-only build: id slot, ordered class set,
/// style-text accumulator, ordered attribute map, and inner markup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupBuilder {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: InlineStyle,
    attrs: Vec<(String, String)>,
    inner: String,
}

impl MarkupBuilder {
    pub fn new(tag: &str) -> Self {
        let tag = tag.trim();
        Self {
            tag: if tag.is_empty() {
                "div".to_owned()
            } else {
                tag.to_ascii_lowercase()
            },
            id: None,
            classes: Vec::new(),
            style: InlineStyle::new(),
            attrs: Vec::new(),
            inner: String::new(),
        }
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_owned());
    }

    /// Adds one class token; duplicates are ignored.
    pub fn add_class(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.classes.iter().any(|class| class == name) {
            return;
        }
        self.classes.push(name.to_owned());
    }

    pub fn append_style_text(&mut self, fragment: &str) {
        self.style.append_text(fragment);
    }

    pub fn set_style_declaration(&mut self, name: &str, value: &str) {
        self.style.set(name, value);
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

    /// Inlines text or pre-built child markup, verbatim.
    pub fn append_text(&mut self, text: &str) {
        self.inner.push_str(text);
    }

    /// Serializes a live child element into the inner markup.
    pub fn append_element(&mut self, element: &Element) {
        write_element(&mut self.inner, element);
    }

    /// Applies one property bag with the node builder's classification,
    /// but every outcome lands in an attribute slot.
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
                        let attr = format!("data-{}", kebab_case_key(&camel_case_key(&name)));
                        self.set_attribute(&attr, &entry.to_string());
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
                let attr = format!("data-{}", kebab_case_key(&camel_case_key(rest)));
                self.set_attribute(&attr, &value.to_string());
                continue;
            }

            self.set_attribute(&key, &value.to_string());
        }
    }

    /// Serializes as `<tag id class style attrs…>inner</tag>`.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.tag);

        if let Some(id) = &self.id {
            write_attribute(&mut out, "id", id);
        }
        if !self.classes.is_empty() {
            write_attribute(&mut out, "class", &self.classes.join(" "));
        }
        if !self.style.is_empty() {
            write_attribute(&mut out, "style", self.style.css_text());
        }
        for (name, value) in &self.attrs {
            if matches!(name.as_str(), "id" | "class" | "style") {
                continue;
            }
            write_attribute(&mut out, name, value);
        }

        out.push('>');
        out.push_str(&self.inner);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::MarkupBuilder;
    use super::element_markup;
    use super::escape_attribute;
    use sprig_dom::Element;
    use sprig_dom::Node;
    use sprig_dom::PropBag;

    #[test]
    fn escapes_quotes_and_ampersands_only() {
        assert_eq!(escape_attribute(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; <c>");
    }

    #[test]
    fn serializes_an_element_with_ordered_attributes() {
        let mut element = Element::new("div");
        element.set_attribute("data-x", "1");
        element.set_id("main");
        element.add_class("a");
        element.add_class("b");
        assert_eq!(
            element_markup(&element),
            r#"<div id="main" class="a b" data-x="1"></div>"#
        );
    }

    #[test]
    fn serializes_children_and_line_breaks() {
        let mut child = Element::new("span");
        child.append_child(Node::Text("x".to_owned()));
        let mut element = Element::new("div");
        element.append_child(Node::Text("line1".to_owned()));
        element.append_child(Node::LineBreak);
        element.append_child(Node::Element(child));
        assert_eq!(
            element_markup(&element),
            "<div>line1<br><span>x</span></div>"
        );
    }

    #[test]
    fn serializes_typed_properties_as_lowercase_attributes() {
        let mut element = Element::new("input");
        element.apply_bag(PropBag::new().with("maxLength", 3_i64).with("disabled", true));
        assert_eq!(
            element_markup(&element),
            r#"<input maxlength="3" disabled="true"></input>"#
        );
    }

    #[test]
    fn text_content_is_not_escaped() {
        let mut element = Element::new("p");
        element.append_child(Node::Text("<b>bold</b> & more".to_owned()));
        assert_eq!(element_markup(&element), "<p><b>bold</b> & more</p>");
    }

    #[test]
    fn builder_renders_id_class_style_then_remaining_attributes() {
        let mut markup = MarkupBuilder::new("section");
        markup.set_attribute("data-kind", "card");
        markup.set_id("hero");
        markup.add_class("wide");
        markup.append_style_text("color:red");
        markup.set_attribute("aria-label", "hero card");
        assert_eq!(
            markup.finish(),
            r#"<section id="hero" class="wide" style="color:red" data-kind="card" aria-label="hero card"></section>"#
        );
    }

    #[test]
    fn builder_bag_classification_matches_node_building() {
        let mut markup = MarkupBuilder::new("div");
        markup.apply_bag(
            PropBag::new()
                .with("id", "x")
                .with("className", "a b")
                .with("style", PropBag::new().with("fontWeight", "bold"))
                .with("dataset", PropBag::new().with("fooBar", "1"))
                .with("data-tip", "t")
                .with("aria-label", "l")
                .with("title", "hi"),
        );
        assert_eq!(
            markup.finish(),
            r#"<div id="x" class="a b" style="font-weight:bold" data-foo-bar="1" data-tip="t" aria-label="l" title="hi"></div>"#
        );
    }

    #[test]
    fn builder_style_string_accumulates_with_heuristic() {
        let mut markup = MarkupBuilder::new("div");
        markup.apply_bag(PropBag::new().with("style", "color:red"));
        markup.apply_bag(PropBag::new().with("style", ";margin:0"));
        assert_eq!(markup.finish(), r#"<div style="color:red;margin:0"></div>"#);
    }

    #[test]
    fn builder_later_bags_override_earlier_values_in_place() {
        let mut markup = MarkupBuilder::new("div");
        markup.apply_bag(PropBag::new().with("rel", "first").with("target", "_blank"));
        markup.apply_bag(PropBag::new().with("rel", "second"));
        assert_eq!(
            markup.finish(),
            r#"<div rel="second" target="_blank"></div>"#
        );
    }

    #[test]
    fn builder_escapes_attribute_values() {
        let mut markup = MarkupBuilder::new("div");
        markup.apply_bag(PropBag::new().with("title", r#"say "hi" & go"#));
        assert_eq!(
            markup.finish(),
            r#"<div title="say &quot;hi&quot; &amp; go"></div>"#
        );
    }
}
