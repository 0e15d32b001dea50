//! Parse, render and sanitize in one call.

use pulldown_cmark::{Options, Parser};

use crate::node::Document;
use crate::rules::RenderRules;
use crate::sanitize::Sanitizer;
use crate::state::TocEntry;
use crate::tree::parse;

/// Treatment of raw HTML embedded in markdown.
///
/// Passthrough always comes with sanitization; the only alternative is to
/// escape raw HTML as text.
#[derive(Clone, Copy, Debug)]
pub enum RawHtml {
    /// Pass raw HTML through and sanitize the rendered document.
    Sanitize(Sanitizer),
    /// Render raw HTML as escaped text.
    Escape,
}

impl Default for RawHtml {
    fn default() -> Self {
        Self::Sanitize(Sanitizer)
    }
}

/// Result of rendering markdown.
#[derive(Clone, Debug, Default)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Table of contents entries.
    pub toc: Vec<TocEntry>,
    /// Warnings generated during rendering (e.g., unclosed containers).
    pub warnings: Vec<String>,
}

/// Markdown pipeline with a pluggable rule set.
///
/// # Example
///
/// ```
/// use folio_renderer::{MarkdownPipeline, PlainRules};
///
/// let result = MarkdownPipeline::new(PlainRules).render("## Hello\n\n**Bold** text");
/// assert_eq!(
///     result.html,
///     r#"<h2 id="hello">Hello</h2><p><strong>Bold</strong> text</p>"#
/// );
/// assert_eq!(result.toc[0].id, "hello");
/// ```
pub struct MarkdownPipeline<R: RenderRules> {
    rules: R,
    raw_html: RawHtml,
    gfm: bool,
}

impl<R: RenderRules> MarkdownPipeline<R> {
    /// Create a pipeline with GFM enabled and sanitized raw HTML.
    #[must_use]
    pub fn new(rules: R) -> Self {
        Self {
            rules,
            raw_html: RawHtml::default(),
            gfm: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    /// - Alerts (`> [!NOTE]`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    #[must_use]
    pub fn with_raw_html(mut self, raw_html: RawHtml) -> Self {
        self.raw_html = raw_html;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Parse markdown into a document tree.
    #[must_use]
    pub fn parse(&self, markdown: &str) -> Document {
        let raw_html = matches!(self.raw_html, RawHtml::Sanitize(_));
        parse(Parser::new_ext(markdown, self.parser_options()), raw_html)
    }

    /// Render markdown to HTML.
    ///
    /// Never fails: if sanitization fails the document is rendered again
    /// with raw HTML escaped, and a warning is recorded.
    pub fn render(&self, markdown: &str) -> RenderResult {
        let document = self.parse(markdown);
        let rendered = document.render(&self.rules);
        let Document { toc, mut warnings, .. } = document;

        let html = match self.raw_html {
            RawHtml::Escape => rendered,
            RawHtml::Sanitize(sanitizer) => match sanitizer.sanitize(&rendered) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(error = %e, "Sanitization failed, escaping raw HTML");
                    warnings.push(format!("Raw HTML escaped after sanitizer failure: {e}"));
                    parse(Parser::new_ext(markdown, self.parser_options()), false)
                        .render(&self.rules)
                }
            },
        };

        for warning in &warnings {
            tracing::debug!(warning = %warning, "Render warning");
        }

        RenderResult {
            html,
            toc,
            warnings,
        }
    }
}
