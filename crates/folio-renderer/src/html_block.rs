//! Classification of raw HTML blocks into container boundaries.
//!
//! CommonMark splits `<div class="callout">\n\nText\n\n</div>` into an HTML
//! block, a paragraph, and another HTML block. The tree builder uses this
//! module to recognise the opening and closing blocks so the markdown in
//! between becomes the container's children.

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

use crate::node::{Attribute, attribute_value};

/// Tags that open a container spanning several markdown blocks.
const CONTAINER_TAGS: &[&str] = &["div", "section", "aside"];

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^<([a-z][a-z0-9]*)\b([^>]*)>(.*)$").expect("invalid open tag regex")
});

static CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^</([a-z][a-z0-9]*)\s*>$").expect("invalid close tag regex")
});

static LINK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^<a\s([^>]*)>$").expect("invalid link tag regex"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("invalid attribute regex")
});

/// Shape of a raw HTML block.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum HtmlBlock {
    /// Opening container tag, optionally followed by raw HTML on the same block.
    Open {
        tag: String,
        attrs: Vec<Attribute>,
        leading: Option<String>,
    },
    /// Closing container tag.
    Close { tag: String },
    /// Container opened and closed within one block.
    Element {
        tag: String,
        attrs: Vec<Attribute>,
        inner: String,
    },
    /// Anything else; passed through as a raw fragment.
    Other,
}

/// Classify a raw HTML block.
pub(crate) fn classify(raw: &str) -> HtmlBlock {
    let trimmed = raw.trim();

    if let Some(caps) = CLOSE_TAG.captures(trimmed) {
        let tag = caps[1].to_ascii_lowercase();
        if is_container(&tag) {
            return HtmlBlock::Close { tag };
        }
        return HtmlBlock::Other;
    }

    let Some(caps) = OPEN_TAG.captures(trimmed) else {
        return HtmlBlock::Other;
    };
    let tag = caps[1].to_ascii_lowercase();
    if !is_container(&tag) {
        return HtmlBlock::Other;
    }

    let attr_src = caps[2].trim();
    let self_closing = attr_src.ends_with('/');
    let attrs = parse_attributes(attr_src.trim_end_matches('/'));
    let rest = caps[3].trim();

    if self_closing {
        return HtmlBlock::Element {
            tag,
            attrs,
            inner: String::new(),
        };
    }
    if rest.is_empty() {
        return HtmlBlock::Open {
            tag,
            attrs,
            leading: None,
        };
    }

    let lower = rest.to_ascii_lowercase();
    let opens = count_open_tags(&lower, &tag);
    let closing = format!("</{tag}>");
    let closes = lower.matches(&closing).count();

    match (1 + opens).checked_sub(closes) {
        Some(0) if lower.ends_with(&closing) => HtmlBlock::Element {
            tag,
            attrs,
            inner: rest[..rest.len() - closing.len()].trim().to_owned(),
        },
        Some(depth) if depth > 0 && closes == opens => HtmlBlock::Open {
            tag,
            attrs,
            leading: Some(rest.to_owned()),
        },
        _ => HtmlBlock::Other,
    }
}

/// Destination and title of an inline `<a href>` start tag.
pub(crate) fn link_open(html: &str) -> Option<(String, String)> {
    let caps = LINK_OPEN.captures(html.trim())?;
    let attrs = parse_attributes(&caps[1]);
    let dest = attribute_value(&attrs, "href")?.to_owned();
    let title = attribute_value(&attrs, "title").unwrap_or_default().to_owned();
    Some((dest, title))
}

/// Whether `html` is a lone `</a>` end tag.
pub(crate) fn is_link_close(html: &str) -> bool {
    CLOSE_TAG
        .captures(html.trim())
        .is_some_and(|caps| caps[1].eq_ignore_ascii_case("a"))
}

fn is_container(tag: &str) -> bool {
    CONTAINER_TAGS.contains(&tag)
}

/// Count `<tag` occurrences that start an element of exactly that name.
fn count_open_tags(lower: &str, tag: &str) -> usize {
    let needle = format!("<{tag}");
    lower
        .match_indices(&needle)
        .filter(|(pos, _)| {
            lower[pos + needle.len()..]
                .chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || c == '>' || c == '/')
        })
        .count()
}

/// Parse the attribute section of a start tag, decoding character references.
pub(crate) fn parse_attributes(src: &str) -> Vec<Attribute> {
    ATTRIBUTE
        .captures_iter(src)
        .map(|caps| Attribute {
            name: caps[1].to_ascii_lowercase(),
            value: caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| decode_html_entities(m.as_str()).into_owned()),
        })
        .collect()
}
