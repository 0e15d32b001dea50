//! Callout classification for HTML containers and GFM alerts.

use pulldown_cmark::BlockQuoteKind;

/// Marker a container's class attribute must contain to be a callout.
const CALLOUT_MARKER: &str = "callout";

/// Callout tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalloutVariant {
    #[default]
    Note,
    Info,
    Warning,
    Success,
}

impl CalloutVariant {
    /// Classify a container by its class attribute.
    ///
    /// Returns `None` unless the class carries the `callout` marker. Variant
    /// tokens are matched first-wins in the order warning, info, success;
    /// anything else is a note.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        if !class.contains(CALLOUT_MARKER) {
            return None;
        }
        let variant = if class.contains("warning") {
            Self::Warning
        } else if class.contains("info") {
            Self::Info
        } else if class.contains("success") {
            Self::Success
        } else {
            Self::Note
        };
        Some(variant)
    }

    /// Lowercase variant name, as used in CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl From<BlockQuoteKind> for CalloutVariant {
    fn from(kind: BlockQuoteKind) -> Self {
        match kind {
            BlockQuoteKind::Note => Self::Note,
            BlockQuoteKind::Tip => Self::Success,
            BlockQuoteKind::Important => Self::Info,
            BlockQuoteKind::Warning | BlockQuoteKind::Caution => Self::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_callout_marker() {
        assert_eq!(CalloutVariant::from_class("warning box"), None);
        assert_eq!(CalloutVariant::from_class(""), None);
    }

    #[test]
    fn test_marker_alone_is_note() {
        assert_eq!(
            CalloutVariant::from_class("callout"),
            Some(CalloutVariant::Note)
        );
    }

    #[test]
    fn test_single_variants() {
        assert_eq!(
            CalloutVariant::from_class("callout info"),
            Some(CalloutVariant::Info)
        );
        assert_eq!(
            CalloutVariant::from_class("callout success"),
            Some(CalloutVariant::Success)
        );
        assert_eq!(
            CalloutVariant::from_class("callout-warning"),
            Some(CalloutVariant::Warning)
        );
    }

    #[test]
    fn test_warning_takes_precedence_over_info() {
        assert_eq!(
            CalloutVariant::from_class("callout info warning"),
            Some(CalloutVariant::Warning)
        );
        assert_eq!(
            CalloutVariant::from_class("callout success info"),
            Some(CalloutVariant::Info)
        );
    }

    #[test]
    fn test_alert_kinds_map_to_variants() {
        assert_eq!(
            CalloutVariant::from(BlockQuoteKind::Tip),
            CalloutVariant::Success
        );
        assert_eq!(
            CalloutVariant::from(BlockQuoteKind::Caution),
            CalloutVariant::Warning
        );
        assert_eq!(
            CalloutVariant::from(BlockQuoteKind::Important),
            CalloutVariant::Info
        );
    }
}
