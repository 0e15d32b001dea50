//! Content sections and pages composed of them.

use std::fmt::Write;

use folio_renderer::escape_html;
use folio_scrollspy::{DocumentLayout, ScrollSpy, ScrollState, Section, SpyConfig};

use crate::toc::TableOfContents;

const DEFAULT_SECTION_CLASS: &str = "shadow-md bg-white rounded-lg p-6";

/// A titled `<section>` that a scroll spy can track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSection {
    /// Anchor id.
    pub id: String,
    /// Heading shown above the body. Empty titles render no heading.
    pub title: String,
    /// Table of contents label; defaults to the title.
    pub label: String,
    /// Pre-rendered body HTML.
    pub body_html: String,
    /// Class attribute of the `<section>` element.
    pub class: String,
}

impl ContentSection {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, body_html: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            label: title.clone(),
            title,
            body_html: body_html.into(),
            class: DEFAULT_SECTION_CLASS.to_owned(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// The tracked section for this block.
    #[must_use]
    pub fn section(&self) -> Section {
        Section::new(&self.id, &self.label)
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        write!(
            out,
            r#"<section id="{}" class="{}">"#,
            escape_html(&self.id),
            escape_html(&self.class)
        )
        .unwrap();
        if !self.title.is_empty() {
            write!(
                out,
                r#"<h2 class="text-2xl font-semibold mb-4 text-neutral-900">{}</h2>"#,
                escape_html(&self.title)
            )
            .unwrap();
        }
        out.push_str(&self.body_html);
        out.push_str("</section>");
        out
    }
}

/// A page of content sections with both table of contents variants.
#[derive(Clone, Debug, Default)]
pub struct SectionPage {
    sections: Vec<ContentSection>,
}

impl SectionPage {
    #[must_use]
    pub fn new(sections: Vec<ContentSection>) -> Self {
        Self { sections }
    }

    #[must_use]
    pub fn content_sections(&self) -> &[ContentSection] {
        &self.sections
    }

    /// Sections in document order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.sections.iter().map(ContentSection::section).collect()
    }

    /// Create a tracker for this page's sections.
    pub fn scroll_spy<L: DocumentLayout>(&self, layout: L, config: SpyConfig) -> ScrollSpy<L> {
        ScrollSpy::new(self.sections(), layout, config)
    }

    /// Render the page with `state` highlighted in both tables of contents.
    #[must_use]
    pub fn render(&self, state: &ScrollState) -> String {
        let items = self.sections();
        let toc = TableOfContents::new(&items, state);

        let mut out = String::from(
            r#"<div class="max-w-6xl mx-auto px-4 py-8"><div class="flex gap-8"><main class="flex-1 min-w-0">"#,
        );
        out.push_str(&toc.render_mobile());
        out.push_str(r#"<div class="space-y-8">"#);
        for section in &self.sections {
            out.push_str(&section.render());
        }
        out.push_str("</div></main>");
        out.push_str(&toc.render_desktop());
        out.push_str("</div></div>");
        out
    }
}
