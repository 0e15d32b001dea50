//! Content API abstraction.

use crate::error::ContentError;
use crate::types::{Post, PostMeta};

/// Read access to the blog content backend.
///
/// Implementations must be `Send + Sync` so loads can run on worker threads.
pub trait ContentApi: Send + Sync {
    /// List published posts, newest first.
    fn list_posts(&self) -> Result<Vec<PostMeta>, ContentError>;

    /// Fetch a single post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MissingSlug`] for an empty slug and
    /// [`ContentError::NotFound`] when the backend has no such post.
    fn get_post(&self, slug: &str) -> Result<Post, ContentError>;
}

impl<T: ContentApi + ?Sized> ContentApi for std::sync::Arc<T> {
    fn list_posts(&self) -> Result<Vec<PostMeta>, ContentError> {
        (**self).list_posts()
    }

    fn get_post(&self, slug: &str) -> Result<Post, ContentError> {
        (**self).get_post(slug)
    }
}
