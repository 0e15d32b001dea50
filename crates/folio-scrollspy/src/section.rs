//! Tracked sections and the derived scroll state.

/// A trackable section of a page.
///
/// `id` is the DOM anchor of the section; `label` is the text shown in the
/// table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Which section, if any, is currently active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Id of the active section; `None` when no section qualifies.
    pub active: Option<String>,
}

impl ScrollState {
    /// Active section id, or `""` when nothing is active.
    #[must_use]
    pub fn active_id(&self) -> &str {
        self.active.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let state = ScrollState::default();
        assert_eq!(state.active_id(), "");
        assert!(!state.is_active(""));
    }

    #[test]
    fn test_active_state() {
        let state = ScrollState {
            active: Some("education".to_owned()),
        };
        assert_eq!(state.active_id(), "education");
        assert!(state.is_active("education"));
        assert!(!state.is_active("aura"));
    }
}
