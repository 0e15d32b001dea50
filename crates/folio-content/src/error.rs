//! Error types for content API access.

/// Error from content API operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Post requested without a slug. No request is made.
    #[error("no post slug provided")]
    MissingSlug,

    /// Post endpoint answered with a non-success status.
    #[error("post not found: {slug}")]
    NotFound {
        /// Requested slug.
        slug: String,
    },

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// JSON deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    /// Whether the error means the post does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::MissingSlug)
    }
}
