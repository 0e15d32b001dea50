//! Heading anchor bookkeeping and text helpers shared by the tree builder
//! and the rule sets.

use std::collections::HashMap;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Assigns unique anchor ids to headings and records them as [`TocEntry`]s.
#[derive(Debug, Default)]
pub(crate) struct HeadingAnchors {
    toc: Vec<TocEntry>,
    id_counts: HashMap<String, usize>,
}

impl HeadingAnchors {
    /// Register a heading and return its unique anchor id.
    pub(crate) fn register(&mut self, level: u8, text: &str) -> String {
        let id = self.unique_id(text);
        self.toc.push(TocEntry {
            level,
            title: text.trim().to_owned(),
            id: id.clone(),
        });
        id
    }

    fn unique_id(&mut self, text: &str) -> String {
        let base_id = match slugify(text) {
            slug if slug.is_empty() => "section".to_owned(),
            slug => slug,
        };
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }

    /// Take the collected entries.
    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("snake_case"), "snake-case");
        assert_eq!(slugify("Café Society"), "café-society");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_duplicate_headings_get_suffixes() {
        let mut anchors = HeadingAnchors::default();
        assert_eq!(anchors.register(2, "FAQ"), "faq");
        assert_eq!(anchors.register(2, "FAQ"), "faq-1");
        assert_eq!(anchors.register(3, "FAQ"), "faq-2");

        let toc = anchors.take_toc();
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[2].level, 3);
        assert_eq!(toc[2].id, "faq-2");
    }

    #[test]
    fn test_punctuation_only_heading_gets_fallback_id() {
        let mut anchors = HeadingAnchors::default();
        assert_eq!(anchors.register(2, "???"), "section");
        assert_eq!(anchors.register(2, "!!!"), "section-1");
    }
}
