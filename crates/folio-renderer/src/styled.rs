//! Site rule set: Tailwind-styled markup matching the blog's look.

use std::fmt::Write;

use crate::callout::CalloutVariant;
use crate::highlight::Highlighter;
use crate::link::LinkKind;
use crate::node::Alignment;
use crate::rules::{ListKind, RenderRules, alignment_style};
use crate::state::escape_html;

const CODE_BLOCK_FRAME: &str = "my-6 rounded-lg border border-neutral-200/60 overflow-hidden shadow-sm";
const CODE_LABEL_BAR: &str = "bg-neutral-100/50 px-4 py-2 border-b border-neutral-200/40";
const CODE_LABEL: &str = "text-xs font-medium text-neutral-600 uppercase tracking-wide";
const CODE_BODY_STYLE: &str =
    "margin: 0; padding: 1rem; background: #1e1e1e; font-size: 0.875rem; line-height: 1.5";
const INLINE_CODE: &str = "bg-neutral-100 text-neutral-800 px-1.5 py-0.5 rounded text-sm font-mono";

const TABLE_FRAME: &str = "my-8 overflow-hidden rounded-lg border border-neutral-200/60 shadow-sm";
const TABLE: &str = "w-full divide-y divide-neutral-200/60";
const TABLE_HEAD: &str = "bg-neutral-50/80";
const TABLE_HEADER_CELL: &str =
    "px-6 py-3 text-left text-xs font-semibold text-neutral-700 uppercase tracking-wider";
const TABLE_CELL: &str =
    "px-6 py-4 whitespace-nowrap text-sm text-neutral-900 border-t border-neutral-200/40";
const TABLE_ROW: &str = "hover:bg-neutral-50/50 transition-colors";

const BLOCKQUOTE: &str = "my-6 border-l-4 border-green-300 bg-green-50/50 p-4 rounded-r-lg";
const CALLOUT_BASE: &str = "my-6 border-l-4 p-4 rounded-r-lg";

const PARAGRAPH: &str = "text-neutral-700 leading-relaxed mb-4 last:mb-0";
const UNORDERED_LIST: &str = "list-disc list-inside space-y-2 my-4 text-neutral-700 ml-4";
const ORDERED_LIST: &str = "list-decimal list-inside space-y-2 my-4 text-neutral-700 ml-4";
const LINK: &str = "text-green-600 hover:text-green-700 underline underline-offset-2 transition-colors";
const RULE: &str = "my-8 border-neutral-200/60";

/// Tailwind-styled rule set used by the site pages.
#[derive(Clone, Debug, Default)]
pub struct StyledRules {
    highlighter: Highlighter,
}

impl StyledRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a named syntect theme for code blocks.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.highlighter = Highlighter::new(theme);
        self
    }
}

fn heading_class(level: u8) -> &'static str {
    match level {
        1 => "text-3xl font-semibold text-neutral-900 mt-12 mb-6 pb-3 border-b border-neutral-200/60 first:mt-0",
        2 => "text-2xl font-semibold text-neutral-900 mt-10 mb-4 pb-2 border-b border-neutral-200/40",
        3 => "text-xl font-medium text-neutral-900 mt-8 mb-3",
        _ => "text-lg font-medium text-neutral-900 mt-6 mb-2",
    }
}

fn callout_tone(variant: CalloutVariant) -> &'static str {
    match variant {
        CalloutVariant::Note | CalloutVariant::Info => "border-blue-300 bg-blue-50/50 text-blue-900",
        CalloutVariant::Warning => "border-yellow-300 bg-yellow-50/50 text-yellow-900",
        CalloutVariant::Success => "border-green-300 bg-green-50/50 text-green-900",
    }
}

impl RenderRules for StyledRules {
    fn heading(&self, level: u8, id: &str, inner: &str, out: &mut String) {
        let class = heading_class(level);
        write!(
            out,
            r#"<h{level} id="{}" class="{class}">{inner}</h{level}>"#,
            escape_html(id)
        )
        .unwrap();
    }

    fn code_block(&self, lang: &str, code: &str, out: &mut String) {
        let label = escape_html(lang);
        write!(
            out,
            r#"<div class="{CODE_BLOCK_FRAME}"><div class="{CODE_LABEL_BAR}"><span class="{CODE_LABEL}">{label}</span></div><pre class="language-{label}" style="{CODE_BODY_STYLE}"><code>{}</code></pre></div>"#,
            self.highlighter.highlight(lang, code)
        )
        .unwrap();
    }

    fn inline_code(&self, code: &str, out: &mut String) {
        write!(out, r#"<code class="{INLINE_CODE}">{}</code>"#, escape_html(code)).unwrap();
    }

    fn table(&self, alignments: &[Alignment], head: &[String], rows: &[Vec<String>], out: &mut String) {
        let align = |i: usize| alignment_style(alignments.get(i).copied().unwrap_or_default());

        write!(
            out,
            r#"<div class="{TABLE_FRAME}"><div class="overflow-x-auto"><table class="{TABLE}"><thead class="{TABLE_HEAD}"><tr>"#
        )
        .unwrap();
        for (i, cell) in head.iter().enumerate() {
            write!(out, r#"<th class="{TABLE_HEADER_CELL}"{}>{cell}</th>"#, align(i)).unwrap();
        }
        out.push_str("</tr></thead><tbody>");
        for row in rows {
            write!(out, r#"<tr class="{TABLE_ROW}">"#).unwrap();
            for (i, cell) in row.iter().enumerate() {
                write!(out, r#"<td class="{TABLE_CELL}"{}>{cell}</td>"#, align(i)).unwrap();
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table></div></div>");
    }

    fn blockquote(&self, inner: &str, out: &mut String) {
        write!(
            out,
            r#"<div class="{BLOCKQUOTE}"><div class="text-neutral-700 italic">{inner}</div></div>"#
        )
        .unwrap();
    }

    fn callout(&self, variant: CalloutVariant, inner: &str, out: &mut String) {
        write!(
            out,
            r#"<div class="{CALLOUT_BASE} {}" data-callout="{}">{inner}</div>"#,
            callout_tone(variant),
            variant.as_str()
        )
        .unwrap();
    }

    fn link(&self, dest: &str, title: &str, kind: LinkKind, inner: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        if kind.is_external() {
            write!(
                out,
                r#"<a href="{}"{title_attr} target="_blank" rel="noopener noreferrer" class="{LINK}">{inner}<span class="inline-block ml-1 text-xs">↗</span></a>"#,
                escape_html(dest)
            )
            .unwrap();
        } else {
            write!(
                out,
                r#"<a href="{}"{title_attr} class="{LINK}">{inner}</a>"#,
                escape_html(dest)
            )
            .unwrap();
        }
    }

    fn image(&self, src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<figure class="my-8"><div class="rounded-lg overflow-hidden border border-neutral-200/60 shadow-sm"><img src="{}" alt="{}"{title_attr} class="w-full h-auto" loading="lazy"></div>"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
        let caption = if title.is_empty() { alt } else { title };
        if !caption.is_empty() {
            write!(
                out,
                r#"<figcaption class="text-center text-sm text-neutral-600 mt-2 italic">{}</figcaption>"#,
                escape_html(caption)
            )
            .unwrap();
        }
        out.push_str("</figure>");
    }

    fn rule(&self, out: &mut String) {
        write!(out, r#"<hr class="{RULE}">"#).unwrap();
    }

    fn list(&self, kind: ListKind, items: &[String], out: &mut String) {
        match kind {
            ListKind::Unordered => write!(out, r#"<ul class="{UNORDERED_LIST}">"#).unwrap(),
            ListKind::Ordered { start: 1 } => write!(out, r#"<ol class="{ORDERED_LIST}">"#).unwrap(),
            ListKind::Ordered { start } => {
                write!(out, r#"<ol start="{start}" class="{ORDERED_LIST}">"#).unwrap();
            }
        }
        for item in items {
            write!(out, r#"<li class="leading-relaxed">{item}</li>"#).unwrap();
        }
        out.push_str(match kind {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered { .. } => "</ol>",
        });
    }

    fn paragraph(&self, inner: &str, out: &mut String) {
        write!(out, r#"<p class="{PARAGRAPH}">{inner}</p>"#).unwrap();
    }
}
