//! Table of contents views.
//!
//! Both variants render from the same [`ScrollState`], so the desktop sidebar
//! and the mobile strip always highlight the same section.

use std::fmt::Write;

use folio_renderer::escape_html;
use folio_scrollspy::{ScrollState, Section};
use tokio::sync::watch;

const ACTIVE_CLASS: &str = "text-green-600 font-medium";
const INACTIVE_CLASS: &str = "text-neutral-600";

/// Table of contents for a list of sections.
#[derive(Debug)]
pub struct TableOfContents<'a> {
    items: &'a [Section],
    active: &'a str,
}

impl<'a> TableOfContents<'a> {
    #[must_use]
    pub fn new(items: &'a [Section], state: &'a ScrollState) -> Self {
        Self {
            items,
            active: state.active_id(),
        }
    }

    fn item_class(&self, id: &str) -> &'static str {
        if !self.active.is_empty() && self.active == id {
            ACTIVE_CLASS
        } else {
            INACTIVE_CLASS
        }
    }

    /// Sticky sidebar shown on large screens.
    #[must_use]
    pub fn render_desktop(&self) -> String {
        let mut out = String::from(
            r#"<aside class="hidden lg:block w-64 sticky top-8 h-fit"><nav class="border-l border-neutral-200 pl-4"><h3 class="text-sm font-medium text-neutral-600 mb-4">On this page</h3><ul class="space-y-2">"#,
        );
        for item in self.items {
            write!(
                out,
                r#"<li><button type="button" data-section="{id}" class="text-sm text-left hover:text-green-600 transition-colors {class}">{label}</button></li>"#,
                id = escape_html(&item.id),
                class = self.item_class(&item.id),
                label = escape_html(&item.label),
            )
            .unwrap();
        }
        out.push_str("</ul></nav></aside>");
        out
    }

    /// Horizontal strip shown above the content on small screens.
    #[must_use]
    pub fn render_mobile(&self) -> String {
        let mut out = String::from(
            r#"<nav class="lg:hidden mb-6 overflow-x-auto border-b border-neutral-200 pb-2"><ul class="flex gap-4 whitespace-nowrap">"#,
        );
        for item in self.items {
            write!(
                out,
                r#"<li><button type="button" data-section="{id}" class="text-sm hover:text-green-600 transition-colors {class}">{label}</button></li>"#,
                id = escape_html(&item.id),
                class = self.item_class(&item.id),
                label = escape_html(&item.label),
            )
            .unwrap();
        }
        out.push_str("</ul></nav>");
        out
    }
}

/// Both table of contents variants rendered from one state snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocHtml {
    pub desktop: String,
    pub mobile: String,
}

/// Subscriber that re-renders the table of contents from the shared state.
#[derive(Debug)]
pub struct TocView {
    sections: Vec<Section>,
    state: watch::Receiver<ScrollState>,
}

impl TocView {
    #[must_use]
    pub fn new(sections: Vec<Section>, state: watch::Receiver<ScrollState>) -> Self {
        Self { sections, state }
    }

    /// Whether the active section changed since the last render.
    ///
    /// A closed channel counts as unchanged.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.state.has_changed().unwrap_or(false)
    }

    /// Render both variants and mark the current state as seen.
    pub fn render(&mut self) -> TocHtml {
        let state = self.state.borrow_and_update();
        let toc = TableOfContents::new(&self.sections, &state);
        TocHtml {
            desktop: toc.render_desktop(),
            mobile: toc.render_mobile(),
        }
    }
}
