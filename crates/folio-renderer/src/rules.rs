//! Per-node rendering rules.
//!
//! A [`RenderRules`] implementation decides the markup for each node kind.
//! Container nodes receive their children already rendered as `inner`.

use std::fmt::Write;

use crate::callout::CalloutVariant;
use crate::link::LinkKind;
use crate::node::{Alignment, Attribute};
use crate::state::escape_html;

/// Ordered or unordered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered { start: u64 },
}

impl ListKind {
    #[must_use]
    pub fn from_start(start: Option<u64>) -> Self {
        start.map_or(Self::Unordered, |start| Self::Ordered { start })
    }
}

/// Markup for every node of a [`Document`](crate::Document).
///
/// Block-level and link-like rules are required; simple inline rules have
/// semantic HTML defaults.
pub trait RenderRules {
    /// Heading with its anchor id. `level` is 1-6.
    fn heading(&self, level: u8, id: &str, inner: &str, out: &mut String);

    /// Fenced code block with a detected language. `code` has its trailing
    /// newline stripped.
    fn code_block(&self, lang: &str, code: &str, out: &mut String);

    /// Inline code span, or a code block without a detectable language.
    fn inline_code(&self, code: &str, out: &mut String);

    /// Table with pre-rendered cells.
    fn table(&self, alignments: &[Alignment], head: &[String], rows: &[Vec<String>], out: &mut String);

    fn blockquote(&self, inner: &str, out: &mut String);

    fn callout(&self, variant: CalloutVariant, inner: &str, out: &mut String);

    fn link(&self, dest: &str, title: &str, kind: LinkKind, inner: &str, out: &mut String);

    fn image(&self, src: &str, alt: &str, title: &str, out: &mut String);

    fn rule(&self, out: &mut String);

    /// List with pre-rendered items.
    fn list(&self, kind: ListKind, items: &[String], out: &mut String);

    fn paragraph(&self, inner: &str, out: &mut String) {
        write!(out, "<p>{inner}</p>").unwrap();
    }

    /// Non-callout HTML container; original attributes are kept.
    fn container(&self, tag: &str, attrs: &[Attribute], inner: &str, out: &mut String) {
        write!(out, "<{tag}{}>{inner}</{tag}>", render_attributes(attrs)).unwrap();
    }

    fn text(&self, text: &str, out: &mut String) {
        out.push_str(&escape_html(text));
    }

    fn emphasis(&self, inner: &str, out: &mut String) {
        write!(out, "<em>{inner}</em>").unwrap();
    }

    fn strong(&self, inner: &str, out: &mut String) {
        write!(out, "<strong>{inner}</strong>").unwrap();
    }

    fn strikethrough(&self, inner: &str, out: &mut String) {
        write!(out, "<del>{inner}</del>").unwrap();
    }

    fn soft_break(&self, out: &mut String) {
        out.push('\n');
    }

    fn hard_break(&self, out: &mut String) {
        out.push_str("<br>");
    }

    fn task_marker(&self, checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }

    /// Raw HTML fragment from the source.
    fn html(&self, html: &str, out: &mut String) {
        out.push_str(html);
    }
}

/// Render attributes as ` name="value"` pairs with escaped values.
#[must_use]
pub fn render_attributes(attrs: &[Attribute]) -> String {
    let mut out = String::new();
    for attr in attrs {
        match &attr.value {
            Some(value) => write!(out, r#" {}="{}""#, attr.name, escape_html(value)).unwrap(),
            None => write!(out, " {}", attr.name).unwrap(),
        }
    }
    out
}

/// Inline `style` declaration for a table cell alignment.
#[must_use]
pub fn alignment_style(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::None => "",
        Alignment::Left => r#" style="text-align: left""#,
        Alignment::Center => r#" style="text-align: center""#,
        Alignment::Right => r#" style="text-align: right""#,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_from_start() {
        assert_eq!(ListKind::from_start(None), ListKind::Unordered);
        assert_eq!(
            ListKind::from_start(Some(3)),
            ListKind::Ordered { start: 3 }
        );
    }

    #[test]
    fn test_render_attributes_escapes_values() {
        let attrs = vec![
            Attribute::new("class", "a\"b"),
            Attribute {
                name: "hidden".to_owned(),
                value: None,
            },
        ];
        assert_eq!(render_attributes(&attrs), r#" class="a&quot;b" hidden"#);
    }
}
