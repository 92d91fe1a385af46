//! Public build surface: a selector plus parts in, a node or markup out.
//!
//! `build_node` assembles a live element; `build_markup` renders the same
//! construction as a markup string without creating live nodes for
//! primitive values. Both share one selector grammar and one
//! property-classification rule set.

pub use sprig_dom::Element;
pub use sprig_dom::Node;
pub use sprig_dom::PropBag;
pub use sprig_dom::PropValue;
pub use sprig_markup::element_markup;
pub use sprig_selector::Selector;

use sprig_markup::MarkupBuilder;

/// One positional argument to a build call.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// An existing node, attached as a child in argument order.
    Node(Element),
    /// Free text; split on line breaks when splitting is enabled.
    Text(String),
    /// A property bag applied to the node being built.
    Props(PropBag),
}

impl From<Element> for Part {
    fn from(value: Element) -> Self {
        Self::Node(value)
    }
}

impl From<&str> for Part {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Part {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<PropBag> for Part {
    fn from(value: PropBag) -> Self {
        Self::Props(value)
    }
}

/// Build-time switches shared by both entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Split text parts on `\n`, interleaving line-break nodes.
    pub split_text_lines: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            split_text_lines: true,
        }
    }
}

/// Builds a live element from a selector and parts, default options.
pub fn build_node(selector: &str, parts: Vec<Part>) -> Element {
    build_node_with(&BuildOptions::default(), selector, parts)
}

/// Builds a live element from a selector and parts.
pub fn build_node_with(options: &BuildOptions, selector: &str, parts: Vec<Part>) -> Element {
    let selector = Selector::parse(selector);
    let mut element = Element::new(&selector.tag);
    if let Some(id) = &selector.id {
        element.set_id(id);
    }
    for class in &selector.classes {
        element.add_class(class);
    }

    // Children collect separately so interleaved property bags never
    // affect child order.
    let mut children: Vec<Node> = Vec::new();
    for part in parts {
        match part {
            Part::Node(child) => children.push(Node::Element(child)),
            Part::Text(text) => push_text_nodes(&mut children, &text, options.split_text_lines),
            Part::Props(bag) => element.apply_bag(bag),
        }
    }
    for child in children {
        element.append_child(child);
    }

    element
}

/// Renders the same construction as a markup string, default options.
pub fn build_markup(selector: &str, parts: Vec<Part>) -> String {
    build_markup_with(&BuildOptions::default(), selector, parts)
}

/// Renders the same construction as a markup string.
///
/// Text parts and pre-built markup strings inline verbatim (line-break
/// splitting applies to live-node construction only); live element parts
/// serialize via their own markup representation.
pub fn build_markup_with(options: &BuildOptions, selector: &str, parts: Vec<Part>) -> String {
    let _ = options;
    let selector = Selector::parse(selector);
    let mut markup = MarkupBuilder::new(&selector.tag);
    if let Some(id) = &selector.id {
        markup.set_id(id);
    }
    for class in &selector.classes {
        markup.add_class(class);
    }

    for part in parts {
        match part {
            Part::Node(child) => markup.append_element(&child),
            Part::Text(text) => markup.append_text(&text),
            Part::Props(bag) => markup.apply_bag(bag),
        }
    }

    markup.finish()
}

fn push_text_nodes(children: &mut Vec<Node>, text: &str, split: bool) {
    if !split {
        children.push(Node::Text(text.to_owned()));
        return;
    }

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            children.push(Node::LineBreak);
        }
        if !line.is_empty() {
            children.push(Node::Text(line.to_owned()));
        }
    }
}
