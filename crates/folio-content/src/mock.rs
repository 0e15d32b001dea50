//! Mock content backend for testing.
//!
//! Provides [`MockContent`] for unit testing without a running backend.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::api::ContentApi;
use crate::error::ContentError;
use crate::types::{Post, PostMeta};

/// Mock content backend.
///
/// Stores posts in memory. Use the builder methods to configure the mock
/// with test data or failures.
///
/// # Example
///
/// ```ignore
/// use folio_content::{ContentApi, MockContent};
///
/// let content = MockContent::new()
///     .with_post("hello", "Hello", "2024-01-15", "# Hello\n\nWorld.");
///
/// let posts = content.list_posts().unwrap();
/// let post = content.get_post("hello").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContent {
    posts: RwLock<Vec<Post>>,
    list_status: RwLock<Option<u16>>,
    unreachable: RwLock<bool>,
    requests: AtomicUsize,
}

impl MockContent {
    /// Create a new empty mock backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post. `publish_date` is `YYYY-MM-DD`.
    ///
    /// # Panics
    ///
    /// Panics if the date is invalid or the internal lock is poisoned.
    #[must_use]
    pub fn with_post(
        self,
        slug: impl Into<String>,
        title: impl Into<String>,
        publish_date: &str,
        content: impl Into<String>,
    ) -> Self {
        let meta = PostMeta {
            slug: slug.into(),
            title: title.into(),
            publish_date: publish_date.parse::<NaiveDate>().unwrap(),
            description: None,
            tags: Vec::new(),
            draft: false,
        };
        self.with_full_post(Post {
            meta,
            content: content.into(),
        })
    }

    /// Add a fully specified post.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_full_post(self, post: Post) -> Self {
        self.posts.write().unwrap().push(post);
        self
    }

    /// Make the list endpoint answer with `status`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_list_status(self, status: u16) -> Self {
        *self.list_status.write().unwrap() = Some(status);
        self
    }

    /// Make every request fail at the transport level.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_unreachable(self) -> Self {
        *self.unreachable.write().unwrap() = true;
        self
    }

    /// Number of requests that reached the backend.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn request(&self) -> Result<(), ContentError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if *self.unreachable.read().unwrap() {
            return Err(ContentError::HttpRequest(ureq::Error::ConnectionFailed));
        }
        Ok(())
    }
}

impl ContentApi for MockContent {
    fn list_posts(&self) -> Result<Vec<PostMeta>, ContentError> {
        self.request()?;
        if let Some(status) = *self.list_status.read().unwrap() {
            return Err(ContentError::HttpResponse {
                status,
                body: String::new(),
            });
        }

        let mut posts: Vec<PostMeta> = self
            .posts
            .read()
            .unwrap()
            .iter()
            .filter(|post| !post.meta.draft)
            .map(|post| post.meta.clone())
            .collect();
        posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        Ok(posts)
    }

    fn get_post(&self, slug: &str) -> Result<Post, ContentError> {
        if slug.is_empty() {
            return Err(ContentError::MissingSlug);
        }
        self.request()?;
        self.posts
            .read()
            .unwrap()
            .iter()
            .find(|post| post.meta.slug == slug)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                slug: slug.to_owned(),
            })
    }
}
