//! Blog post page.

use std::fmt::Write;

use folio_content::{ContentApi, ContentError, Post, PostMeta};
use folio_renderer::{MarkdownPipeline, RenderRules, TocEntry, escape_html};
use folio_scrollspy::Section;
use tracing::warn;

use crate::blog_list::render_date_and_tags;
use crate::state::PageState;

/// Message shown when the route has no slug.
pub const NO_SLUG: &str = "No post slug provided";
/// Message shown when the backend has no such post.
pub const POST_NOT_FOUND: &str = "Post not found";
/// Message shown when the post could not be fetched.
pub const FETCH_POST_FAILED: &str = "Failed to fetch post";

const PAGE_OPEN: &str = r#"<section class="w-full max-w-2xl mx-auto px-4 m-4">"#;

const ARTICLE_CLASS: &str = "prose prose-neutral max-w-none prose-headings:text-neutral-900 prose-headings:font-medium prose-headings:lowercase prose-p:text-neutral-700 prose-p:leading-relaxed prose-a:text-green-600 prose-a:underline prose-a:underline-offset-2 hover:prose-a:text-green-700 prose-code:text-neutral-800 prose-code:bg-neutral-100 prose-code:px-1 prose-code:py-0.5 prose-code:rounded prose-pre:bg-neutral-900 prose-pre:text-neutral-100 prose-blockquote:border-l-green-200 prose-blockquote:bg-green-50/30 prose-blockquote:text-neutral-700 prose-table:text-sm";

/// A fetched post with its body rendered to HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPost {
    pub meta: PostMeta,
    /// Sanitized article HTML.
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub warnings: Vec<String>,
}

impl RenderedPost {
    /// Render the markdown body of `post`.
    pub fn new<R: RenderRules>(post: Post, pipeline: &MarkdownPipeline<R>) -> Self {
        let result = pipeline.render(&post.content);
        for warning in &result.warnings {
            warn!(slug = %post.meta.slug, "{warning}");
        }
        Self {
            meta: post.meta,
            html: result.html,
            toc: result.toc,
            warnings: result.warnings,
        }
    }

    /// Level-2 headings as trackable sections.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.toc
            .iter()
            .filter(|entry| entry.level == 2)
            .map(|entry| Section::new(&entry.id, &entry.title))
            .collect()
    }
}

/// Inline message for a failed post fetch.
fn error_message(error: &ContentError) -> &'static str {
    match error {
        ContentError::MissingSlug => NO_SLUG,
        ContentError::NotFound { .. } | ContentError::HttpResponse { .. } => POST_NOT_FOUND,
        ContentError::HttpRequest(_) | ContentError::Json(_) => FETCH_POST_FAILED,
    }
}

/// The `/blog/{slug}` page.
#[derive(Clone, Debug, Default)]
pub struct BlogPostPage {
    state: PageState<RenderedPost>,
}

impl BlogPostPage {
    #[must_use]
    pub fn new(state: PageState<RenderedPost>) -> Self {
        Self { state }
    }

    /// Fetch and render the post for `slug`.
    ///
    /// A missing or empty slug fails without contacting the backend.
    pub fn load<R: RenderRules>(
        api: &dyn ContentApi,
        slug: Option<&str>,
        pipeline: &MarkdownPipeline<R>,
    ) -> PageState<RenderedPost> {
        match api.get_post(slug.unwrap_or_default()) {
            Ok(post) => PageState::Ready(RenderedPost::new(post, pipeline)),
            Err(e) => {
                warn!(slug = slug.unwrap_or_default(), error = %e, "Failed to load post");
                PageState::Failed(error_message(&e).to_owned())
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageState<RenderedPost> {
        &self.state
    }

    pub fn set_state(&mut self, state: PageState<RenderedPost>) {
        self.state = state;
    }

    /// Sections of the loaded post; empty while loading or after failure.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.state
            .ready()
            .map(RenderedPost::sections)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => format!(
                r#"{PAGE_OPEN}<div class="text-center text-neutral-600">Loading...</div></section>"#
            ),
            PageState::Failed(message) => format!(
                r#"{PAGE_OPEN}<div class="text-center text-red-600">Error: {}</div><div class="text-center mt-4"><a href="/blog" class="text-green-600 hover:text-green-700 underline underline-offset-2">← back to blog</a></div></section>"#,
                escape_html(message)
            ),
            PageState::Ready(post) => render_post(post),
        }
    }
}

fn render_post(post: &RenderedPost) -> String {
    let meta = &post.meta;
    let mut out = String::from(PAGE_OPEN);
    out.push_str(r#"<div class="relative border border-neutral-200/60 rounded-lg p-6 bg-white/85 backdrop-blur-sm shadow-sm ring-1 ring-neutral-100/80">"#);
    out.push_str(r#"<div class="mb-6"><a href="/blog" class="inline-flex items-center gap-2 text-neutral-600 hover:text-green-600 text-sm transition-colors"><span>←</span><span>back to blog</span></a></div>"#);

    write!(
        out,
        r#"<header class="mb-8 space-y-4"><h1 class="text-2xl font-medium text-neutral-900 leading-tight">{}</h1>"#,
        escape_html(&meta.title)
    )
    .unwrap();
    out.push_str(r#"<div class="flex flex-wrap items-center gap-4 text-sm text-neutral-500">"#);
    render_date_and_tags(meta, &mut out);
    out.push_str("</div>");
    if let Some(description) = &meta.description {
        write!(
            out,
            r#"<p class="text-neutral-600 text-base italic border-l-4 border-green-200 pl-4 py-2 bg-green-50/50 rounded-r">{}</p>"#,
            escape_html(description)
        )
        .unwrap();
    }
    out.push_str("</header>");

    write!(out, r#"<article class="{ARTICLE_CLASS}">{}</article>"#, post.html).unwrap();
    out.push_str("</div></section>");
    out
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use folio_content::MockContent;
    use folio_renderer::{PlainRules, StyledRules};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::lifecycle::{MountScope, spawn_guarded};

    const BODY: &str = "# Title\n\nIntro.\n\n## Setup\n\nSteps.\n\n### Detail\n\n## Usage\n\n<script>alert(1)</script>\n";

    fn api() -> MockContent {
        MockContent::new().with_post("hello", "Hello", "2024-01-15", BODY)
    }

    #[test]
    fn test_missing_slug() {
        let api = api();
        let pipeline = MarkdownPipeline::new(PlainRules);
        let state = BlogPostPage::load(&api, None, &pipeline);
        assert_eq!(state, PageState::Failed(NO_SLUG.to_owned()));
        assert_eq!(api.request_count(), 0);

        let html = BlogPostPage::new(state).render();
        assert!(html.contains("Error: No post slug provided"));
        assert!(html.contains(r#"<a href="/blog""#));
    }

    #[test]
    fn test_post_not_found() {
        let pipeline = MarkdownPipeline::new(PlainRules);
        let page = BlogPostPage::new(BlogPostPage::load(&api(), Some("nope"), &pipeline));
        let html = page.render();
        assert!(html.contains("Error: Post not found"));
        assert!(html.contains("← back to blog</a>"));
        assert!(html.contains(r#"href="/blog""#));
        assert!(page.sections().is_empty());
    }

    #[test]
    fn test_network_failure() {
        let api = api().with_unreachable();
        let pipeline = MarkdownPipeline::new(PlainRules);
        let html = BlogPostPage::new(BlogPostPage::load(&api, Some("hello"), &pipeline)).render();
        assert!(html.contains("Error: Failed to fetch post"));
        assert!(html.contains("← back to blog"));
    }

    #[test]
    fn test_loaded_post() {
        let pipeline = MarkdownPipeline::new(StyledRules::new());
        let page = BlogPostPage::new(BlogPostPage::load(&api(), Some("hello"), &pipeline));
        let html = page.render();

        assert!(html.contains("<span>back to blog</span>"));
        assert!(html.contains(">Hello</h1>"));
        assert!(html.contains(r#"<time datetime="2024-01-15">January 15, 2024</time>"#));
        assert!(html.contains(r#"<article class="prose"#));
        assert!(html.contains(r#"id="setup""#));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_level_two_headings_become_sections() {
        let pipeline = MarkdownPipeline::new(PlainRules);
        let page = BlogPostPage::new(BlogPostPage::load(&api(), Some("hello"), &pipeline));
        assert_eq!(
            page.sections(),
            vec![Section::new("setup", "Setup"), Section::new("usage", "Usage")]
        );
    }

    #[test]
    fn test_loading() {
        let page = BlogPostPage::default();
        assert!(page.state().is_loading());
        assert!(page.render().contains("Loading..."));
        assert!(page.sections().is_empty());
    }

    #[test]
    fn test_guarded_load_applies_to_mounted_page() {
        let api = Arc::new(api());
        let page = Arc::new(Mutex::new(BlogPostPage::default()));
        let scope = MountScope::new();

        let target = Arc::clone(&page);
        let handle = spawn_guarded(
            scope.mount(),
            move || BlogPostPage::load(&*api, Some("hello"), &MarkdownPipeline::new(PlainRules)),
            move |state| target.lock().unwrap().set_state(state),
        );

        assert!(handle.join().unwrap());
        assert_eq!(page.lock().unwrap().sections().len(), 2);
    }
}
