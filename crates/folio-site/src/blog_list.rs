//! Blog index page.

use std::fmt::Write;

use folio_content::{ContentApi, PostMeta};
use folio_renderer::escape_html;
use tracing::warn;

use crate::date::{format_date, iso_date};
use crate::state::PageState;

/// Message shown when the post list cannot be fetched.
pub const FETCH_POSTS_FAILED: &str = "Failed to fetch posts";

const PAGE_OPEN: &str = r#"<section class="w-full max-w-2xl mx-auto px-4 m-4">"#;

/// The `/blog` page.
#[derive(Clone, Debug, Default)]
pub struct BlogListPage {
    state: PageState<Vec<PostMeta>>,
}

impl BlogListPage {
    #[must_use]
    pub fn new(state: PageState<Vec<PostMeta>>) -> Self {
        Self { state }
    }

    /// Fetch the post list. Failures become an inline message.
    pub fn load(api: &dyn ContentApi) -> PageState<Vec<PostMeta>> {
        match api.list_posts() {
            Ok(posts) => PageState::Ready(posts),
            Err(e) => {
                warn!(error = %e, "Failed to fetch posts");
                PageState::Failed(FETCH_POSTS_FAILED.to_owned())
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageState<Vec<PostMeta>> {
        &self.state
    }

    pub fn set_state(&mut self, state: PageState<Vec<PostMeta>>) {
        self.state = state;
    }

    #[must_use]
    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => format!(
                r#"{PAGE_OPEN}<div class="text-center text-neutral-600">Loading...</div></section>"#
            ),
            PageState::Failed(message) => format!(
                r#"{PAGE_OPEN}<div class="text-center text-red-600">Error: {}</div></section>"#,
                escape_html(message)
            ),
            PageState::Ready(posts) => render_posts(posts),
        }
    }
}

fn render_posts(posts: &[PostMeta]) -> String {
    let mut out = String::from(PAGE_OPEN);
    out.push_str(r#"<div class="relative border border-neutral-200/60 rounded-lg p-6 bg-white/85 backdrop-blur-sm shadow-sm ring-1 ring-neutral-100/80">"#);
    out.push_str(r#"<header class="mb-8"><h1 class="text-2xl font-normal lowercase tracking-tight text-neutral-900 mb-2">blog</h1><p class="text-base text-neutral-600">thoughts on ai, systems, and human potential</p></header>"#);
    out.push_str(r#"<div class="space-y-6">"#);

    if posts.is_empty() {
        out.push_str(r#"<div class="text-center text-neutral-600">No blog posts found.</div>"#);
    }
    for post in posts {
        render_entry(post, &mut out);
    }

    out.push_str("</div></div></section>");
    out
}

fn render_entry(post: &PostMeta, out: &mut String) {
    write!(
        out,
        r#"<article class="border-b border-neutral-100 pb-6 last:border-b-0"><a href="/blog/{slug}" class="group block hover:bg-neutral-50/50 rounded-lg p-4 -m-4 transition-colors"><h2 class="text-lg font-medium text-neutral-900 group-hover:text-green-600 transition-colors mb-2">{title}</h2>"#,
        slug = escape_html(&post.slug),
        title = escape_html(&post.title),
    )
    .unwrap();

    out.push_str(r#"<div class="flex items-center gap-4 mb-3 text-sm text-neutral-500">"#);
    render_date_and_tags(post, out);
    out.push_str("</div>");

    if let Some(description) = &post.description {
        write!(
            out,
            r#"<p class="text-neutral-600 text-sm leading-relaxed">{}</p>"#,
            escape_html(description)
        )
        .unwrap();
    }

    out.push_str(r#"<div class="flex items-center gap-2 mt-3 text-sm text-green-600 opacity-0 group-hover:opacity-100 transition-opacity"><span>read more</span><span>→</span></div>"#);
    out.push_str("</a></article>");
}

/// `<time>` element followed by tag pills, shared with the post page.
pub(crate) fn render_date_and_tags(meta: &PostMeta, out: &mut String) {
    write!(
        out,
        r#"<time datetime="{}">{}</time>"#,
        iso_date(meta.publish_date),
        format_date(meta.publish_date)
    )
    .unwrap();

    if meta.tags.is_empty() {
        return;
    }
    out.push_str(r#"<div class="flex flex-wrap gap-2">"#);
    for tag in &meta.tags {
        write!(
            out,
            r#"<span class="inline-block bg-neutral-100 text-neutral-600 px-2 py-1 rounded-full text-xs">{}</span>"#,
            escape_html(tag)
        )
        .unwrap();
    }
    out.push_str("</div>");
}
