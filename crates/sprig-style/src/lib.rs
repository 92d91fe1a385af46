//! Inline style model.
//!
//! Style text is kept verbatim, the way an element's `style` attribute
//! holds it. Raw fragments append with a separating `;` heuristic;
//! structured assignment parses the text, upserts one declaration, and
//! re-serializes in compact normalized form. The append heuristic is not
//! a CSS-correct merge.

/// Inline style of a single element, backed by its raw style text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    text: String,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Current style text, verbatim.
    pub fn css_text(&self) -> &str {
        &self.text
    }

    /// Appends a raw style-text fragment.
    ///
    /// The fragment is trimmed; empty fragments are a no-op. A `;`
    /// separator is inserted only when the existing text is non-empty and
    /// the fragment does not already start with one.
    pub fn append_text(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }

        if !self.text.trim().is_empty() && !fragment.starts_with(';') {
            self.text.push(';');
        }
        self.text.push_str(fragment);
    }

    /// Upserts one declaration, folding camel-cased names to kebab case.
    ///
    /// Existing declarations keep their first-seen position; the whole
    /// text is re-serialized in compact form, the way structured style
    /// assignment normalizes an element's style text.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = css_property_name(name);
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return;
        }

        let mut declarations = collapse_declarations(parse_declarations(&self.text));
        match declarations
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, existing_value)) => *existing_value = value.to_owned(),
            None => declarations.push((name, value.to_owned())),
        }

        self.text = serialize_declarations(&declarations);
    }

    /// Looks up a declaration by name; the last occurrence wins.
    pub fn get(&self, name: &str) -> Option<String> {
        let name = css_property_name(name);
        parse_declarations(&self.text)
            .into_iter()
            .rev()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
            .map(|(_, value)| value)
    }

    /// Parsed (name, value) pairs in source order, duplicates included.
    pub fn declarations(&self) -> Vec<(String, String)> {
        parse_declarations(&self.text)
    }
}

/// Folds a camel-cased property name (`backgroundColor`) to its kebab form.
///
/// A `-` is inserted only before an uppercase letter that follows a
/// lowercase letter or digit, so already-kebab and all-caps names pass
/// through unchanged apart from lowercasing.
pub fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len().saturating_add(4));
    let mut prev_foldable = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_uppercase() && prev_foldable {
            out.push('-');
        }
        prev_foldable = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        out.push(ch.to_ascii_lowercase());
    }

    out
}

fn parse_declarations(text: &str) -> Vec<(String, String)> {
    let mut declarations = Vec::new();

    for declaration in split_top_level(text, ';') {
        let trimmed = declaration.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(colon_idx) = find_top_level_colon(trimmed) else {
            continue;
        };

        let name = trimmed[..colon_idx].trim();
        let value = trimmed[colon_idx.saturating_add(1)..].trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }

        declarations.push((name.to_owned(), value.to_owned()));
    }

    declarations
}

/// Collapses duplicate declarations: last value wins, first position kept.
fn collapse_declarations(declarations: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut collapsed: Vec<(String, String)> = Vec::with_capacity(declarations.len());

    for (name, value) in declarations {
        match collapsed
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, existing_value)) => *existing_value = value,
            None => collapsed.push((name, value)),
        }
    }

    collapsed
}

fn serialize_declarations(declarations: &[(String, String)]) -> String {
    let mut out = String::new();

    for (name, value) in declarations {
        if !out.is_empty() {
            out.push(';');
        }
        out.push_str(name);
        out.push(':');
        out.push_str(value);
    }

    out
}

fn split_top_level(input: &str, delimiter: char) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0_usize;
    let mut idx = 0_usize;
    let mut in_single = false;
    let mut in_double = false;
    let mut escape = false;
    let mut paren_depth = 0_u32;

    while idx < bytes.len() {
        let byte = bytes[idx];

        if in_single {
            if !escape && byte == b'\\' {
                escape = true;
            } else if !escape && byte == b'\'' {
                in_single = false;
            } else {
                escape = false;
            }
            idx = idx.saturating_add(1);
            continue;
        }

        if in_double {
            if !escape && byte == b'\\' {
                escape = true;
            } else if !escape && byte == b'"' {
                in_double = false;
            } else {
                escape = false;
            }
            idx = idx.saturating_add(1);
            continue;
        }

        match byte {
            b'\'' => in_single = true,
            b'"' => in_double = true,
            b'(' => paren_depth = paren_depth.saturating_add(1),
            b')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {
                if byte == delimiter as u8 && paren_depth == 0 {
                    parts.push(&input[start..idx]);
                    start = idx.saturating_add(1);
                }
            }
        }

        idx = idx.saturating_add(1);
    }

    if start <= input.len() {
        parts.push(&input[start..]);
    }

    parts
}

fn find_top_level_colon(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut idx = 0_usize;
    let mut in_single = false;
    let mut in_double = false;
    let mut escape = false;
    let mut paren_depth = 0_u32;

    while idx < bytes.len() {
        let byte = bytes[idx];

        if in_single {
            if !escape && byte == b'\\' {
                escape = true;
            } else if !escape && byte == b'\'' {
                in_single = false;
            } else {
                escape = false;
            }
            idx = idx.saturating_add(1);
            continue;
        }

        if in_double {
            if !escape && byte == b'\\' {
                escape = true;
            } else if !escape && byte == b'"' {
                in_double = false;
            } else {
                escape = false;
            }
            idx = idx.saturating_add(1);
            continue;
        }

        match byte {
            b'\'' => in_single = true,
            b'"' => in_double = true,
            b'(' => paren_depth = paren_depth.saturating_add(1),
            b')' => paren_depth = paren_depth.saturating_sub(1),
            b':' if paren_depth == 0 => return Some(idx),
            _ => {}
        }

        idx = idx.saturating_add(1);
    }

    None
}
