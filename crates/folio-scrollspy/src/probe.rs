//! Active section selection.
//!
//! A horizontal activation line sits a fixed distance below the viewport
//! top. The section whose anchor straddles that line is active; near the
//! bottom of the document the last section is forced instead, so short
//! trailing sections can still become active.

/// Anchor bounds relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub bottom: f64,
}

impl AnchorRect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the rect straddles a horizontal line at `line`.
    #[must_use]
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom > line
    }
}

/// Scroll position and extent of the viewport and document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    /// Whether the viewport is within `epsilon` of the end of the document.
    #[must_use]
    pub fn at_bottom(&self, epsilon: f64) -> bool {
        self.scroll_y + self.height >= self.document_height - epsilon
    }
}

/// Probe parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpyConfig {
    /// Distance of the activation line from the viewport top.
    pub activation_offset: f64,
    /// Slack for the bottom-of-document check.
    pub bottom_epsilon: f64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            activation_offset: 100.0,
            bottom_epsilon: 2.0,
        }
    }
}

/// Select the active section among present anchors, given in document order.
///
/// The last anchor straddling the activation line wins. At the bottom of
/// the document the last anchor wins regardless of position.
pub fn locate_active<'a, I>(anchors: I, viewport: Viewport, config: &SpyConfig) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, AnchorRect)>,
{
    let mut current = None;
    let mut last = None;
    for (id, rect) in anchors {
        if rect.straddles(config.activation_offset) {
            current = Some(id);
        }
        last = Some(id);
    }

    if viewport.at_bottom(config.bottom_epsilon) {
        last
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 800.0,
            document_height: 5000.0,
        }
    }

    #[test]
    fn test_straddle_is_top_inclusive_bottom_exclusive() {
        assert!(AnchorRect::new(100.0, 200.0).straddles(100.0));
        assert!(!AnchorRect::new(0.0, 100.0).straddles(100.0));
        assert!(!AnchorRect::new(101.0, 300.0).straddles(100.0));
    }

    #[test]
    fn test_single_straddling_anchor() {
        let anchors = [
            ("intro", AnchorRect::new(-400.0, 50.0)),
            ("usage", AnchorRect::new(50.0, 600.0)),
            ("faq", AnchorRect::new(600.0, 900.0)),
        ];
        assert_eq!(
            locate_active(anchors, viewport(400.0), &SpyConfig::default()),
            Some("usage")
        );
    }

    #[test]
    fn test_no_anchor_on_line() {
        let anchors = [
            ("intro", AnchorRect::new(-400.0, 20.0)),
            ("usage", AnchorRect::new(300.0, 600.0)),
        ];
        assert_eq!(
            locate_active(anchors, viewport(400.0), &SpyConfig::default()),
            None
        );
    }

    #[test]
    fn test_last_straddling_anchor_wins() {
        let anchors = [
            ("outer", AnchorRect::new(0.0, 1000.0)),
            ("nested", AnchorRect::new(50.0, 300.0)),
        ];
        assert_eq!(
            locate_active(anchors, viewport(0.0), &SpyConfig::default()),
            Some("nested")
        );
    }

    #[test]
    fn test_bottom_override_forces_last_anchor() {
        let anchors = [
            ("intro", AnchorRect::new(-100.0, 400.0)),
            ("outro", AnchorRect::new(600.0, 700.0)),
        ];
        let at_bottom = Viewport {
            scroll_y: 4199.0,
            height: 800.0,
            document_height: 5000.0,
        };
        assert_eq!(
            locate_active(anchors, at_bottom, &SpyConfig::default()),
            Some("outro")
        );
    }

    #[test]
    fn test_bottom_override_without_anchors() {
        let at_bottom = Viewport {
            scroll_y: 0.0,
            height: 800.0,
            document_height: 500.0,
        };
        assert_eq!(locate_active([], at_bottom, &SpyConfig::default()), None);
    }

    #[test]
    fn test_custom_activation_offset() {
        let anchors = [("a", AnchorRect::new(150.0, 400.0))];
        let config = SpyConfig {
            activation_offset: 200.0,
            ..SpyConfig::default()
        };
        assert_eq!(locate_active(anchors, viewport(0.0), &config), Some("a"));
        assert_eq!(
            locate_active(anchors, viewport(0.0), &SpyConfig::default()),
            None
        );
    }
}
