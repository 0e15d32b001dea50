//! Plain rule set.
//!
//! Produces semantic HTML5 without styling classes, suitable for feeds and
//! command-line previews.

use std::fmt::Write;

use crate::callout::CalloutVariant;
use crate::link::LinkKind;
use crate::node::Alignment;
use crate::rules::{ListKind, RenderRules, alignment_style};
use crate::state::escape_html;

/// Semantic HTML rule set.
///
/// Produces:
/// - `<pre><code class="language-*">` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<aside class="callout callout-*">` for callouts
/// - `<img>` for images
pub struct PlainRules;

impl RenderRules for PlainRules {
    fn heading(&self, level: u8, id: &str, inner: &str, out: &mut String) {
        write!(out, r#"<h{level} id="{}">{inner}</h{level}>"#, escape_html(id)).unwrap();
    }

    fn code_block(&self, lang: &str, code: &str, out: &mut String) {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(code)
        )
        .unwrap();
    }

    fn inline_code(&self, code: &str, out: &mut String) {
        write!(out, "<code>{}</code>", escape_html(code)).unwrap();
    }

    fn table(&self, alignments: &[Alignment], head: &[String], rows: &[Vec<String>], out: &mut String) {
        let align = |i: usize| alignment_style(alignments.get(i).copied().unwrap_or_default());

        out.push_str("<table><thead><tr>");
        for (i, cell) in head.iter().enumerate() {
            write!(out, "<th{}>{cell}</th>", align(i)).unwrap();
        }
        out.push_str("</tr></thead><tbody>");
        for row in rows {
            out.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                write!(out, "<td{}>{cell}</td>", align(i)).unwrap();
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
    }

    fn blockquote(&self, inner: &str, out: &mut String) {
        write!(out, "<blockquote>{inner}</blockquote>").unwrap();
    }

    fn callout(&self, variant: CalloutVariant, inner: &str, out: &mut String) {
        write!(
            out,
            r#"<aside class="callout callout-{}">{inner}</aside>"#,
            variant.as_str()
        )
        .unwrap();
    }

    fn link(&self, dest: &str, title: &str, kind: LinkKind, inner: &str, out: &mut String) {
        write!(out, r#"<a href="{}""#, escape_html(dest)).unwrap();
        if !title.is_empty() {
            write!(out, r#" title="{}""#, escape_html(title)).unwrap();
        }
        if kind.is_external() {
            out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
        }
        write!(out, ">{inner}</a>").unwrap();
    }

    fn image(&self, src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }

    fn rule(&self, out: &mut String) {
        out.push_str("<hr>");
    }

    fn list(&self, kind: ListKind, items: &[String], out: &mut String) {
        match kind {
            ListKind::Unordered => out.push_str("<ul>"),
            ListKind::Ordered { start: 1 } => out.push_str("<ol>"),
            ListKind::Ordered { start } => write!(out, r#"<ol start="{start}">"#).unwrap(),
        }
        for item in items {
            write!(out, "<li>{item}</li>").unwrap();
        }
        out.push_str(match kind {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered { .. } => "</ol>",
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        PlainRules.code_block("rust", "fn main() {}", &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_blockquote() {
        let mut out = String::new();
        PlainRules.blockquote("content", &mut out);
        assert_eq!(out, "<blockquote>content</blockquote>");
    }

    #[test]
    fn test_image() {
        let mut out = String::new();
        PlainRules.image("image.png", "Alt text", "", &mut out);
        assert_eq!(out, r#"<img src="image.png" alt="Alt text">"#);
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        PlainRules.image("image.png", "Alt text", "Image title", &mut out);
        assert_eq!(
            out,
            r#"<img src="image.png" title="Image title" alt="Alt text">"#
        );
    }

    #[test]
    fn test_external_link() {
        let mut out = String::new();
        PlainRules.link("https://example.com", "", LinkKind::External, "x", &mut out);
        assert_eq!(
            out,
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn test_internal_link_with_title() {
        let mut out = String::new();
        PlainRules.link("/about", "About me", LinkKind::Internal, "x", &mut out);
        assert_eq!(out, r#"<a href="/about" title="About me">x</a>"#);
    }

    #[test]
    fn test_callout() {
        let mut out = String::new();
        PlainRules.callout(CalloutVariant::Success, "<p>ok</p>", &mut out);
        assert_eq!(
            out,
            r#"<aside class="callout callout-success"><p>ok</p></aside>"#
        );
    }

    #[test]
    fn test_table_alignment() {
        let mut out = String::new();
        PlainRules.table(
            &[Alignment::Center],
            &["h".to_owned()],
            &[vec!["c".to_owned()]],
            &mut out,
        );
        assert_eq!(
            out,
            r#"<table><thead><tr><th style="text-align: center">h</th></tr></thead><tbody><tr><td style="text-align: center">c</td></tr></tbody></table>"#
        );
    }
}
