//! Page views for the Folio site.
//!
//! This crate provides:
//! - [`BlogListPage`] and [`BlogPostPage`]: blog pages backed by a
//!   [`ContentApi`](folio_content::ContentApi)
//! - [`TableOfContents`] and [`TocView`]: desktop and mobile navigation
//!   rendered from one [`ScrollState`](folio_scrollspy::ScrollState)
//! - [`ContentSection`] and [`SectionPage`]: long-form pages a scroll spy
//!   can track
//! - [`MountScope`] and [`spawn_guarded`]: loads whose results are dropped
//!   once the page is gone
//!
//! # Example
//!
//! ```ignore
//! use std::sync::{Arc, Mutex};
//!
//! use folio_content::ContentClient;
//! use folio_renderer::{MarkdownPipeline, StyledRules};
//! use folio_site::{BlogPostPage, MountScope, spawn_guarded};
//!
//! let api = Arc::new(ContentClient::new("http://localhost:8000"));
//! let page = Arc::new(Mutex::new(BlogPostPage::default()));
//! let scope = MountScope::new();
//!
//! let target = Arc::clone(&page);
//! spawn_guarded(
//!     scope.mount(),
//!     move || BlogPostPage::load(&*api, Some("hello"), &MarkdownPipeline::new(StyledRules::new())),
//!     move |state| target.lock().unwrap().set_state(state),
//! );
//! ```

mod blog_list;
mod blog_post;
mod date;
mod lifecycle;
mod section;
mod settings;
mod state;
mod toc;

pub use blog_list::{BlogListPage, FETCH_POSTS_FAILED};
pub use blog_post::{BlogPostPage, FETCH_POST_FAILED, NO_SLUG, POST_NOT_FOUND, RenderedPost};
pub use date::{format_date, iso_date};
pub use lifecycle::{MountScope, MountToken, spawn_guarded};
pub use section::{ContentSection, SectionPage};
pub use settings::{raw_html, spy_config, styled_pipeline};
pub use state::PageState;
pub use toc::{TableOfContents, TocHtml, TocView};
