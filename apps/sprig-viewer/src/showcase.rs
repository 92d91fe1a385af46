//! Showcase document built through the public builder surface.

use sprig_builder::Element;
use sprig_builder::PropBag;
use sprig_builder::build_node;
use sprig_builder::element_markup;

pub fn showcase_document() -> Element {
    build_node(
        "main#showcase.page",
        vec![
            build_node("h1.title", vec!["Sprig".into()]).into(),
            build_node(
                "p.lede",
                vec!["Build element trees from compact selectors.".into()],
            )
            .into(),
            build_node(
                "section#features.card",
                vec![
                    PropBag::new()
                        .with("data-section", "features")
                        .with("aria-label", "feature list")
                        .into(),
                    build_node("h2", vec!["Features".into()]).into(),
                    build_node(
                        "p",
                        vec!["selector parsing\nproperty bags\nmarkup output".into()],
                    )
                    .into(),
                ],
            )
            .into(),
            build_node(
                "section#styling.card",
                vec![
                    build_node("h2", vec!["Styling".into()]).into(),
                    build_node(
                        "p",
                        vec![
                            "Inline styles merge declaration by declaration.".into(),
                            PropBag::new()
                                .with(
                                    "style",
                                    PropBag::new()
                                        .with("color", "#a03333")
                                        .with("fontWeight", "bold"),
                                )
                                .with("title", "styled paragraph")
                                .into(),
                        ],
                    )
                    .into(),
                ],
            )
            .into(),
        ],
    )
}

pub fn showcase_markup() -> String {
    element_markup(&showcase_document())
}

#[cfg(test)]
mod tests {
    use super::showcase_document;
    use super::showcase_markup;

    #[test]
    fn document_root_carries_selector_id_and_class() {
        let document = showcase_document();
        assert_eq!(document.tag(), "main");
        assert_eq!(document.id(), Some("showcase"));
        assert!(document.has_class("page"));
    }

    #[test]
    fn markup_is_deterministic() {
        assert_eq!(showcase_markup(), showcase_markup());
    }

    #[test]
    fn markup_opens_with_the_root_selector() {
        let markup = showcase_markup();
        assert!(markup.starts_with(r#"<main id="showcase" class="page">"#));
        assert!(markup.ends_with("</main>"));
    }

    #[test]
    fn markup_contains_the_title_heading() {
        assert!(showcase_markup().contains(r#"<h1 class="title">Sprig</h1>"#));
    }

    #[test]
    fn multi_line_text_serializes_with_break_tags() {
        assert!(
            showcase_markup().contains("<p>selector parsing<br>property bags<br>markup output</p>")
        );
    }

    #[test]
    fn bag_attributes_reach_the_markup() {
        let markup = showcase_markup();
        assert!(markup.contains(r#"data-section="features""#));
        assert!(markup.contains(r#"aria-label="feature list""#));
        assert!(markup.contains(r#"style="color:#a03333;font-weight:bold""#));
        assert!(markup.contains(r#"title="styled paragraph""#));
    }
}
