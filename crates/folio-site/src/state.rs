//! Load state of a page.

/// What a page shows while its data loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageState<T> {
    /// Fetch in flight.
    Loading,
    /// Fetch failed; the message is shown inline.
    Failed(String),
    /// Data available.
    Ready(T),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> PageState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}
