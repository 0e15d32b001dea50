//! Content API types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blog post metadata.
///
/// Serde ignores unknown fields from the API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostMeta {
    /// URL slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Publication date. Datetime strings are truncated to the date.
    #[serde(with = "publish_date")]
    pub publish_date: NaiveDate,
    /// Short summary shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Drafts are hidden from listings by the backend.
    #[serde(default)]
    pub draft: bool,
}

/// Blog post with metadata and markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    /// Post metadata.
    pub meta: PostMeta,
    /// Markdown source (may contain raw HTML).
    pub content: String,
}

mod publish_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid publish_date: {raw}"))
        })
    }

    /// Parse a date, a naive datetime, or an RFC 3339 timestamp.
    fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return Some(date);
        }
        if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
            return Some(datetime.date());
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|datetime| datetime.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_post_meta_defaults() {
        let meta: PostMeta = serde_json::from_str(
            r#"{"slug": "hello", "title": "Hello", "publish_date": "2024-01-15"}"#,
        )
        .unwrap();

        assert_eq!(meta.slug, "hello");
        assert_eq!(meta.publish_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(meta.description, None);
        assert!(meta.tags.is_empty());
        assert!(!meta.draft);
    }

    #[test]
    fn test_parse_datetime_publish_date() {
        let meta: PostMeta = serde_json::from_str(
            r#"{"slug": "a", "title": "A", "publish_date": "2024-03-05T14:30:00"}"#,
        )
        .unwrap();
        assert_eq!(meta.publish_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_publish_date() {
        let meta: PostMeta = serde_json::from_str(
            r#"{"slug": "a", "title": "A", "publish_date": "2024-03-05T14:30:00+02:00"}"#,
        )
        .unwrap();
        assert_eq!(meta.publish_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_invalid_publish_date() {
        let result: Result<PostMeta, _> = serde_json::from_str(
            r#"{"slug": "a", "title": "A", "publish_date": "last tuesday"}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid publish_date"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let meta: PostMeta = serde_json::from_str(
            r#"{"slug": "a", "title": "A", "publish_date": "2024-01-01", "author": "me", "tags": ["rust"]}"#,
        )
        .unwrap();
        assert_eq!(meta.tags, vec!["rust".to_owned()]);
    }

    #[test]
    fn test_serialize_date_only() {
        let meta = PostMeta {
            slug: "a".to_owned(),
            title: "A".to_owned(),
            publish_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: None,
            tags: Vec::new(),
            draft: false,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(
            json,
            r#"{"slug":"a","title":"A","publish_date":"2024-01-15","tags":[],"draft":false}"#
        );
    }

    #[test]
    fn test_parse_post() {
        let post: Post = serde_json::from_str(
            r##"{"meta": {"slug": "a", "title": "A", "publish_date": "2024-01-01"}, "content": "# A"}"##,
        )
        .unwrap();
        assert_eq!(post.meta.title, "A");
        assert_eq!(post.content, "# A");
    }
}
