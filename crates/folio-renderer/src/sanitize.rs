//! HTML sanitization of rendered output.
//!
//! Raw HTML from markdown sources passes through the tree untouched, so the
//! rendered document is rewritten with lol_html before it reaches a page.

use html_escape::decode_html_entities;
use lol_html::errors::RewritingError;
use lol_html::html_content::Element;
use lol_html::{RewriteStrSettings, element, rewrite_str};

/// Elements removed together with their content.
///
/// SVG animation elements are listed because they can rewrite `href` at
/// runtime.
const BLOCKED_ELEMENTS: &[&str] = &[
    "script",
    "iframe",
    "object",
    "embed",
    "applet",
    "frame",
    "frameset",
    "base",
    "meta",
    "link",
    "noscript",
    "template",
    "animate",
    "animatemotion",
    "animatetransform",
    "set",
];

/// Schemes a URL attribute may carry. Relative URLs have no scheme.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Attributes holding a URL.
const URL_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "action",
    "formaction",
    "xlink:href",
    "poster",
    "background",
    "cite",
    "srcset",
];

/// Strips executable content from HTML.
///
/// Removes [`BLOCKED_ELEMENTS`], every `on*` event handler attribute, and URL
/// attributes whose scheme is not in [`ALLOWED_SCHEMES`] (`data:image/` is
/// also kept). Character references are decoded before the scheme is read.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sanitizer;

impl Sanitizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `html`, returning the sanitized document.
    ///
    /// # Errors
    ///
    /// Returns the rewriter error if the input cannot be processed.
    pub fn sanitize(&self, html: &str) -> Result<String, RewritingError> {
        rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![element!("*", |el| {
                    sanitize_element(el);
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )
    }
}

fn sanitize_element(el: &mut Element<'_, '_>) {
    let tag = el.tag_name();
    if BLOCKED_ELEMENTS
        .iter()
        .any(|blocked| tag.eq_ignore_ascii_case(blocked))
    {
        el.remove();
        return;
    }

    let unsafe_attrs: Vec<String> = el
        .attributes()
        .iter()
        .filter(|attr| {
            let name = attr.name();
            name.starts_with("on") || (is_url_attribute(&name) && is_dangerous_url(&attr.value()))
        })
        .map(|attr| attr.name())
        .collect();

    for name in unsafe_attrs {
        el.remove_attribute(&name);
    }
}

fn is_url_attribute(name: &str) -> bool {
    URL_ATTRIBUTES.contains(&name)
}

/// Whether a URL attribute value (or any `srcset` candidate) has a blocked scheme.
fn is_dangerous_url(value: &str) -> bool {
    let decoded = decode_html_entities(value);
    decoded
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
        .chain(std::iter::once(&*decoded))
        .any(has_blocked_scheme)
}

fn has_blocked_scheme(url: &str) -> bool {
    // Browsers ignore embedded whitespace and control characters in schemes.
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let head = normalized.split(['/', '?', '#']).next().unwrap_or_default();
    // A reference the decoder did not resolve may still spell a scheme.
    if head.contains('&') {
        return true;
    }
    match head.split_once(':') {
        None => false,
        Some(("data", _)) => !normalized.starts_with("data:image/"),
        Some((scheme, _)) => !ALLOWED_SCHEMES.contains(&scheme),
    }
}
