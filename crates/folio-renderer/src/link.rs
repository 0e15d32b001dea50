//! Link destination classification.

/// Where a link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Absolute `http://` or `https://` URL; opens in a new browsing context.
    External,
    /// Relative path, fragment, or non-web scheme; navigates in place.
    Internal,
}

impl LinkKind {
    /// Classify a link destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_renderer::LinkKind;
    ///
    /// assert_eq!(LinkKind::classify("https://example.com/x"), LinkKind::External);
    /// assert_eq!(LinkKind::classify("/blog/my-post"), LinkKind::Internal);
    /// ```
    #[must_use]
    pub fn classify(dest: &str) -> Self {
        let dest = dest.trim_start();
        let is_web_scheme = ["http://", "https://"].iter().any(|scheme| {
            dest.get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });
        if is_web_scheme {
            Self::External
        } else {
            Self::Internal
        }
    }

    #[must_use]
    pub fn is_external(self) -> bool {
        self == Self::External
    }
}
