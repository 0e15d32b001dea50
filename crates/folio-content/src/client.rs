//! HTTP client for the content backend.
//!
//! Provides a sync client for the two read endpoints:
//! `GET /v1/content/posts` and `GET /v1/content/posts/{slug}`.

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use ureq::Agent;

use crate::api::ContentApi;
use crate::error::ContentError;
use crate::types::{Post, PostMeta};

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Unreserved characters: A-Z a-z 0-9 - . _ ~
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Content backend client.
pub struct ContentClient {
    agent: Agent,
    base_url: String,
}

impl ContentClient {
    /// Create client for `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create client with an explicit request timeout.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/v1/content/posts", self.base_url)
    }

    fn post_url(&self, slug: &str) -> String {
        format!(
            "{}/{}",
            self.posts_url(),
            utf8_percent_encode(slug, PATH_SEGMENT)
        )
    }

    /// Issue a GET and return status plus body.
    fn get(&self, url: &str) -> Result<(u16, String), ContentError> {
        let response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()
            .inspect_err(|e| warn!(url, error = %e, "Content request failed"))?;

        let status = response.status().as_u16();
        let body = if !is_success(status) {
            response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned())
        } else {
            response.into_body().read_to_string()?
        };
        Ok((status, body))
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ContentError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Only 2xx responses carry a JSON document; redirects are not followed.
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl ContentApi for ContentClient {
    fn list_posts(&self) -> Result<Vec<PostMeta>, ContentError> {
        let url = self.posts_url();
        info!("Listing posts from {}", url);

        let (status, body) = self.get(&url)?;
        if !is_success(status) {
            warn!(status, "Post list request failed");
            return Err(ContentError::HttpResponse { status, body });
        }

        let posts: Vec<PostMeta> = Self::parse(&body)?;
        info!("Found {} posts", posts.len());
        Ok(posts)
    }

    fn get_post(&self, slug: &str) -> Result<Post, ContentError> {
        if slug.is_empty() {
            return Err(ContentError::MissingSlug);
        }

        let url = self.post_url(slug);
        info!("Getting post {}", slug);

        let (status, body) = self.get(&url)?;
        if !is_success(status) {
            warn!(status, slug, "Post request failed");
            return Err(ContentError::NotFound {
                slug: slug.to_owned(),
            });
        }

        Self::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Serve canned responses, one per connection, and report request lines.
    fn serve(responses: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                loop {
                    let mut header = String::new();
                    reader.read_line(&mut header).unwrap();
                    if header == "\r\n" || header.is_empty() {
                        break;
                    }
                }
                tx.send(request_line.trim_end().to_owned()).unwrap();

                let response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });

        (format!("http://{addr}"), rx)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ContentClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.posts_url(), "http://localhost:8000/v1/content/posts");
    }

    #[test]
    fn test_post_url_encodes_slug() {
        let client = ContentClient::new("http://localhost:8000");
        assert_eq!(
            client.post_url("a b/c"),
            "http://localhost:8000/v1/content/posts/a%20b%2Fc"
        );
        assert_eq!(
            client.post_url("my-post_1.2~x"),
            "http://localhost:8000/v1/content/posts/my-post_1.2~x"
        );
    }

    #[test]
    fn test_success_is_2xx_only() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(304));
        assert!(!is_success(404));
    }

    #[test]
    fn test_get_post_empty_slug_makes_no_request() {
        let client = ContentClient::new("http://127.0.0.1:9");
        let err = client.get_post("").unwrap_err();
        assert!(matches!(err, ContentError::MissingSlug));
    }

    #[test]
    fn test_list_posts() {
        let (url, requests) = serve(vec![(
            200,
            r#"[{"slug": "b", "title": "B", "publish_date": "2024-02-01T00:00:00"},
                {"slug": "a", "title": "A", "publish_date": "2024-01-01", "tags": ["x"]}]"#,
        )]);
        let client = ContentClient::new(&url);

        let posts = client.list_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "b");
        assert_eq!(posts[1].tags, vec!["x".to_owned()]);
        assert_eq!(requests.recv().unwrap(), "GET /v1/content/posts HTTP/1.1");
    }

    #[test]
    fn test_list_posts_error_status() {
        let (url, _requests) = serve(vec![(500, r#"{"detail": "boom"}"#)]);
        let client = ContentClient::new(&url);

        let err = client.list_posts().unwrap_err();
        match err {
            ContentError::HttpResponse { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, r#"{"detail": "boom"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_get_post() {
        let (url, requests) = serve(vec![(
            200,
            r##"{"meta": {"slug": "hello", "title": "Hello", "publish_date": "2024-01-15"}, "content": "# Hello"}"##,
        )]);
        let client = ContentClient::new(&url);

        let post = client.get_post("hello").unwrap();
        assert_eq!(post.meta.title, "Hello");
        assert_eq!(post.content, "# Hello");
        assert_eq!(
            requests.recv().unwrap(),
            "GET /v1/content/posts/hello HTTP/1.1"
        );
    }

    #[test]
    fn test_get_post_not_found() {
        let (url, _requests) = serve(vec![(404, r#"{"detail": "Post not found"}"#)]);
        let client = ContentClient::new(&url);

        let err = client.get_post("missing").unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, ContentError::NotFound { slug } if slug == "missing"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let (url, _requests) = serve(vec![(200, "not json")]);
        let client = ContentClient::new(&url);

        let err = client.list_posts().unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn test_connection_refused_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ContentClient::with_timeout(&format!("http://{addr}"), Duration::from_secs(2));
        let err = client.list_posts().unwrap_err();
        assert!(matches!(err, ContentError::HttpRequest(_)));
        assert!(!err.is_not_found());
    }
}
