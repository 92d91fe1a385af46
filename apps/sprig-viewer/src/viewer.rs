//! Immediate-mode rendering of built element trees.
//!
//! One-shot per frame from an immutable tree; there is no diffing or
//! reconciliation. Only the node shapes the builder emits are handled;
//! unknown tags render as plain blocks.

use eframe::egui;
use sprig_builder::Element;
use sprig_builder::Node;

pub fn render_document(ui: &mut egui::Ui, root: &Element) {
    render_children(ui, root);
}

fn render_children(ui: &mut egui::Ui, element: &Element) {
    for child in element.children() {
        render_node(ui, child);
    }
}

fn render_node(ui: &mut egui::Ui, node: &Node) {
    match node {
        Node::Text(text) => {
            ui.label(text.as_str());
        }
        Node::LineBreak => ui.add_space(2.0),
        Node::Element(element) => render_element(ui, element),
    }
}

fn render_element(ui: &mut egui::Ui, element: &Element) {
    match element.tag() {
        "h1" => render_heading(ui, element, 28.0),
        "h2" => render_heading(ui, element, 22.0),
        "h3" => render_heading(ui, element, 18.0),
        "hr" => {
            ui.separator();
        }
        "p" => {
            ui.horizontal_wrapped(|ui| render_inline(ui, element));
            ui.add_space(4.0);
        }
        _ => {
            render_children(ui, element);
            ui.add_space(2.0);
        }
    }
}

fn render_heading(ui: &mut egui::Ui, element: &Element, default_size: f32) {
    let text = element.text_content();
    if text.is_empty() {
        return;
    }

    let mut rich = egui::RichText::new(text).strong().size(default_size);
    if let Some(color) = style_color(element) {
        rich = rich.color(color);
    }
    ui.label(rich);
    ui.add_space(4.0);
}

fn render_inline(ui: &mut egui::Ui, element: &Element) {
    for child in element.children() {
        match child {
            Node::Text(text) => {
                let mut rich = egui::RichText::new(text.as_str());
                if style_is_bold(element) {
                    rich = rich.strong();
                }
                if let Some(color) = style_color(element) {
                    rich = rich.color(color);
                }
                ui.label(rich);
            }
            Node::LineBreak => ui.add_space(2.0),
            Node::Element(inner) => render_element(ui, inner),
        }
    }
}

fn style_is_bold(element: &Element) -> bool {
    element.style().get("font-weight").as_deref() == Some("bold")
}

fn style_color(element: &Element) -> Option<egui::Color32> {
    parse_hex_color(&element.style().get("color")?)
}

fn parse_hex_color(value: &str) -> Option<egui::Color32> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(egui::Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(egui::Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;
    use super::style_is_bold;
    use eframe::egui::Color32;
    use sprig_builder::PropBag;
    use sprig_builder::build_node;

    #[test]
    fn parses_six_digit_hex_colors() {
        assert_eq!(parse_hex_color("#a03333"), Some(Color32::from_rgb(160, 51, 51)));
    }

    #[test]
    fn parses_three_digit_hex_colors() {
        assert_eq!(parse_hex_color("#f00"), Some(Color32::from_rgb(255, 0, 0)));
    }

    #[test]
    fn rejects_non_hex_colors() {
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("#zzz"), None);
    }

    #[test]
    fn detects_bold_styling() {
        let element = build_node(
            "p",
            vec![
                PropBag::new()
                    .with("style", PropBag::new().with("fontWeight", "bold"))
                    .into(),
            ],
        );
        assert!(style_is_bold(&element));
        assert!(!style_is_bold(&build_node("p", vec![])));
    }
}
