//! Selector grammar parsing.
//!
//! A selector is `tag#id.class1.class2` with every part optional and `#`/`.`
//! groups interleaving freely. Malformed input never errors; segments that
//! do not parse cleanly are dropped.

/// Tag used when a selector omits the tag segment.
pub const DEFAULT_TAG: &str = "div";

/// Parsed form of a `tag#id.class` selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    /// Splits `input` on `#`/`.` delimiters, retaining delimiter type.
    ///
    /// The first token (possibly empty) is the tag, defaulting to `div`.
    /// Each following (delimiter, value) pair assigns the id (`#`, last one
    /// wins) or appends a class (`.`). Empty values are ignored.
    pub fn parse(input: &str) -> Self {
        let bytes = input.as_bytes();
        let tag_end = next_delimiter(bytes, 0);
        let tag_raw = &input[..tag_end];
        let tag = if tag_raw.is_empty() {
            DEFAULT_TAG.to_owned()
        } else {
            tag_raw.to_ascii_lowercase()
        };

        let mut id = None;
        let mut classes: Vec<String> = Vec::new();
        let mut idx = tag_end;

        while idx < bytes.len() {
            let delimiter = bytes[idx];
            let value_start = idx.saturating_add(1);
            let value_end = next_delimiter(bytes, value_start);
            let value = &input[value_start..value_end];
            idx = value_end;

            if value.is_empty() {
                continue;
            }

            match delimiter {
                b'#' => id = Some(value.to_owned()),
                b'.' => {
                    if !classes.iter().any(|class| class == value) {
                        classes.push(value.to_owned());
                    }
                }
                _ => {}
            }
        }

        Self { tag, id, classes }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::parse("")
    }
}

fn next_delimiter(bytes: &[u8], from: usize) -> usize {
    let mut idx = from;
    while idx < bytes.len() {
        if bytes[idx] == b'#' || bytes[idx] == b'.' {
            return idx;
        }
        idx = idx.saturating_add(1);
    }

    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::Selector;

    #[test]
    fn empty_selector_defaults_to_div() {
        let selector = Selector::parse("");
        assert_eq!(selector.tag, "div");
        assert_eq!(selector.id, None);
        assert!(selector.classes.is_empty());
    }

    #[test]
    fn parses_bare_tag() {
        let selector = Selector::parse("span");
        assert_eq!(selector.tag, "span");
        assert_eq!(selector.id, None);
    }

    #[test]
    fn parses_tag_id_and_classes() {
        let selector = Selector::parse("section#myid.foo.bar");
        assert_eq!(selector.tag, "section");
        assert_eq!(selector.id.as_deref(), Some("myid"));
        assert_eq!(selector.classes, vec!["foo".to_owned(), "bar".to_owned()]);
    }

    #[test]
    fn id_without_tag_defaults_to_div() {
        let selector = Selector::parse("#myid");
        assert_eq!(selector.tag, "div");
        assert_eq!(selector.id.as_deref(), Some("myid"));
    }

    #[test]
    fn classes_without_tag_default_to_div() {
        let selector = Selector::parse(".foo.bar");
        assert_eq!(selector.tag, "div");
        assert_eq!(selector.classes, vec!["foo".to_owned(), "bar".to_owned()]);
    }

    #[test]
    fn last_id_segment_wins() {
        let selector = Selector::parse("div#first#second");
        assert_eq!(selector.id.as_deref(), Some("second"));
    }

    #[test]
    fn interleaved_groups_parse_in_order() {
        let selector = Selector::parse("nav.left#main.right");
        assert_eq!(selector.tag, "nav");
        assert_eq!(selector.id.as_deref(), Some("main"));
        assert_eq!(
            selector.classes,
            vec!["left".to_owned(), "right".to_owned()]
        );
    }

    #[test]
    fn empty_segments_are_ignored() {
        let selector = Selector::parse("div#.a..b#");
        assert_eq!(selector.tag, "div");
        assert_eq!(selector.id, None);
        assert_eq!(selector.classes, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn duplicate_classes_collapse() {
        let selector = Selector::parse(".a.b.a");
        assert_eq!(selector.classes, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn custom_tags_are_accepted() {
        let selector = Selector::parse("my-widget#custom-id.foo.bar");
        assert_eq!(selector.tag, "my-widget");
        assert_eq!(selector.id.as_deref(), Some("custom-id"));
        assert_eq!(selector.classes, vec!["foo".to_owned(), "bar".to_owned()]);
    }

    #[test]
    fn uppercase_tags_normalize() {
        let selector = Selector::parse("DIV#X");
        assert_eq!(selector.tag, "div");
        assert_eq!(selector.id.as_deref(), Some("X"));
    }
}
