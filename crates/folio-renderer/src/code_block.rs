//! Code language detection.
//!
//! Fence info strings are mapped onto the `language-<name>` class convention
//! and the language is read back out of that class with a single pattern.
//! A fence that yields no language renders as inline code, the same as a
//! code span.

use std::sync::LazyLock;

use regex::Regex;

/// Class prefix carrying the fence language.
const LANGUAGE_CLASS_PREFIX: &str = "language-";

static LANGUAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"language-(\w+)").expect("invalid language regex"));

/// Class attribute for a fence info string: `python` and `language-python`
/// both become `language-python`.
#[must_use]
pub fn language_class(info: &str) -> String {
    if info.starts_with(LANGUAGE_CLASS_PREFIX) {
        info.to_owned()
    } else {
        format!("{LANGUAGE_CLASS_PREFIX}{info}")
    }
}

/// Extract the code language from a fence info string.
///
/// Returns `None` when the fence has no info string or the derived class
/// does not match `language-(\w+)`.
///
/// # Examples
///
/// ```
/// use folio_renderer::detect_language;
///
/// assert_eq!(detect_language(Some("python")), Some("python".to_owned()));
/// assert_eq!(detect_language(Some("language-rust")), Some("rust".to_owned()));
/// assert_eq!(detect_language(None), None);
/// ```
#[must_use]
pub fn detect_language(info: Option<&str>) -> Option<String> {
    let info = info.map(str::trim).filter(|info| !info.is_empty())?;
    let class = language_class(info);
    LANGUAGE_CLASS
        .captures(&class)
        .and_then(|caps| caps.get(1))
        .map(|lang| lang.as_str().to_owned())
}

/// Strip a single trailing newline from code block content.
#[must_use]
pub fn strip_trailing_newline(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_class() {
        assert_eq!(language_class("python"), "language-python");
        assert_eq!(language_class("language-python"), "language-python");
    }

    #[test]
    fn test_detect_language_plain_info() {
        assert_eq!(detect_language(Some("python")), Some("python".to_owned()));
    }

    #[test]
    fn test_detect_language_prefixed_info() {
        assert_eq!(
            detect_language(Some("language-python")),
            Some("python".to_owned())
        );
    }

    #[test]
    fn test_detect_language_stops_at_non_word_char() {
        assert_eq!(detect_language(Some("c++")), Some("c".to_owned()));
        assert_eq!(
            detect_language(Some("objective-c")),
            Some("objective".to_owned())
        );
    }

    #[test]
    fn test_detect_language_none() {
        assert_eq!(detect_language(None), None);
        assert_eq!(detect_language(Some("")), None);
        assert_eq!(detect_language(Some("   ")), None);
        assert_eq!(detect_language(Some("+++")), None);
    }

    #[test]
    fn test_strip_single_trailing_newline() {
        assert_eq!(strip_trailing_newline("print(1)\n"), "print(1)");
        assert_eq!(strip_trailing_newline("print(1)\n\n"), "print(1)\n");
        assert_eq!(strip_trailing_newline("print(1)\r\n"), "print(1)");
        assert_eq!(strip_trailing_newline("print(1)"), "print(1)");
    }
}
