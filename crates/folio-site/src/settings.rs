//! Building site components from configuration.

use folio_config::{RenderConfig, ScrollSpyConfig};
use folio_renderer::{Highlighter, MarkdownPipeline, RawHtml, StyledRules};
use folio_scrollspy::SpyConfig;
use tracing::warn;

/// Scroll-spy parameters from the `[scroll_spy]` section.
#[must_use]
pub fn spy_config(config: &ScrollSpyConfig) -> SpyConfig {
    SpyConfig {
        activation_offset: config.activation_offset,
        bottom_epsilon: config.bottom_epsilon,
    }
}

/// Styled pipeline from the `[render]` section.
///
/// Unknown highlight themes fall back to the default theme.
#[must_use]
pub fn styled_pipeline(config: &RenderConfig) -> MarkdownPipeline<StyledRules> {
    if !Highlighter::has_theme(&config.highlight_theme) {
        warn!(theme = %config.highlight_theme, "Unknown highlight theme, using default");
    }
    MarkdownPipeline::new(StyledRules::new().with_theme(&config.highlight_theme))
        .with_gfm(config.gfm)
        .with_raw_html(raw_html(config))
}

/// Raw HTML handling from the `[render]` section.
#[must_use]
pub fn raw_html(config: &RenderConfig) -> RawHtml {
    if config.raw_html {
        RawHtml::default()
    } else {
        RawHtml::Escape
    }
}
