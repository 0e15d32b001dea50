//! Syntax highlighting for fenced code blocks.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, append_highlighted_html_for_styled_line};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::state::escape_html;

/// Theme used when none is configured or the configured one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Highlights code into inline-styled `<span>` markup.
#[derive(Clone, Debug)]
pub struct Highlighter {
    theme: String,
}

impl Highlighter {
    /// Create a highlighter for a named theme.
    ///
    /// Unknown theme names fall back to [`DEFAULT_THEME`] at highlight time.
    #[must_use]
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    /// Whether a theme with this name is bundled.
    #[must_use]
    pub fn has_theme(name: &str) -> bool {
        THEMES.themes.contains_key(name)
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        &self.theme
    }

    fn theme(&self) -> Option<&'static Theme> {
        THEMES
            .themes
            .get(&self.theme)
            .or_else(|| THEMES.themes.get(DEFAULT_THEME))
    }

    /// Highlight `code` as `lang`.
    ///
    /// Languages without a bundled grammar, and any highlighting failure,
    /// produce escaped plain text.
    #[must_use]
    pub fn highlight(&self, lang: &str, code: &str) -> String {
        let Some(syntax) = SYNTAXES.find_syntax_by_token(lang) else {
            return escape_html(code);
        };
        let Some(theme) = self.theme() else {
            return escape_html(code);
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut out = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let highlighted = highlighter
                .highlight_line(line, &SYNTAXES)
                .and_then(|regions| {
                    append_highlighted_html_for_styled_line(
                        &regions,
                        IncludeBackground::No,
                        &mut out,
                    )
                });
            if let Err(e) = highlighted {
                tracing::debug!(lang, error = %e, "Highlighting failed, using plain text");
                return escape_html(code);
            }
        }
        out
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_bundled() {
        assert!(Highlighter::has_theme(DEFAULT_THEME));
        assert!(!Highlighter::has_theme("no-such-theme"));
    }

    #[test]
    fn test_known_language_produces_spans() {
        let html = Highlighter::default().highlight("rust", "fn main() {}");
        assert!(html.contains("<span"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_is_escaped_plain_text() {
        let html = Highlighter::default().highlight("notalanguage", "a < b");
        assert_eq!(html, "a &lt; b");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let html = Highlighter::new("missing").highlight("python", "x = 1");
        assert!(html.contains("<span"));
    }

    #[test]
    fn test_highlighted_output_escapes_markup() {
        let html = Highlighter::default().highlight("html", "<script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;"));
    }
}
