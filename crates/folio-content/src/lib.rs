//! Content API client for Folio.
//!
//! The blog content lives behind an external backend with two read
//! endpoints. This crate provides:
//!
//! - [`ContentApi`]: the trait page views load posts through
//! - [`ContentClient`]: a blocking ureq-backed implementation
//! - [`MockContent`]: an in-memory implementation (feature `mock`)
//!
//! # Example
//!
//! ```no_run
//! use folio_content::{ContentApi, ContentClient};
//!
//! let client = ContentClient::new("http://localhost:8000");
//! for meta in client.list_posts()? {
//!     println!("{} ({})", meta.title, meta.publish_date);
//! }
//! # Ok::<(), folio_content::ContentError>(())
//! ```

mod api;
mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod types;

pub use api::ContentApi;
pub use client::{ContentClient, DEFAULT_TIMEOUT};
pub use error::ContentError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContent;
pub use types::{Post, PostMeta};
