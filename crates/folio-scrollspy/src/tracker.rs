//! The scroll-spy tracker.
//!
//! [`ScrollSpy`] owns the tracked sections and the single writer side of a
//! `watch` channel holding the [`ScrollState`]. Views subscribe to the
//! channel and render from the shared value. [`ScrollSpy::activate`] hooks
//! the tracker up to an [`EventTarget`]; the returned [`ActiveSpy`] guard
//! removes the listeners when dropped.

use std::rc::Rc;

use tokio::sync::watch;

use crate::layout::{
    DocumentLayout, EventKind, EventTarget, Listener, ListenerId, ListenerOptions, ScrollBehavior,
};
use crate::probe::{SpyConfig, locate_active};
use crate::section::{ScrollState, Section};

/// Tracks which section of a page is active.
pub struct ScrollSpy<L: DocumentLayout> {
    sections: Vec<Section>,
    layout: L,
    config: SpyConfig,
    state: watch::Sender<ScrollState>,
}

impl<L: DocumentLayout> ScrollSpy<L> {
    /// Create a tracker for `sections`, given in document order.
    ///
    /// The state starts empty; it is computed on [`refresh`](Self::refresh)
    /// or [`activate`](Self::activate).
    pub fn new(sections: Vec<Section>, layout: L, config: SpyConfig) -> Self {
        let (state, _) = watch::channel(ScrollState::default());
        Self {
            sections,
            layout,
            config,
            state,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    #[must_use]
    pub fn config(&self) -> SpyConfig {
        self.config
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ScrollState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state.borrow().clone()
    }

    /// Recompute the active section from the current layout.
    ///
    /// Subscribers are notified only if the active section changed; the
    /// return value reports whether it did.
    pub fn refresh(&self) -> bool {
        let viewport = self.layout.viewport();
        let anchors = self.sections.iter().filter_map(|section| {
            self.layout
                .anchor_rect(&section.id)
                .map(|rect| (section.id.as_str(), rect))
        });
        let active = locate_active(anchors, viewport, &self.config).map(str::to_owned);

        self.state.send_if_modified(|state| {
            if state.active == active {
                return false;
            }
            tracing::debug!(
                from = state.active_id(),
                to = active.as_deref().unwrap_or_default(),
                "Active section changed"
            );
            state.active = active;
            true
        })
    }

    /// Smooth-scroll to the section anchor with `id`.
    ///
    /// Ids without a mounted anchor are ignored. The state is not touched;
    /// it follows from the scroll events the host emits.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        if self.layout.anchor_rect(id).is_none() {
            tracing::debug!(id, "Ignoring scroll request for missing anchor");
            return false;
        }
        self.layout.scroll_to_anchor(id, ScrollBehavior::Smooth)
    }
}

impl<L: DocumentLayout + 'static> ScrollSpy<L> {
    /// Listen for scroll and resize events on `target` and compute the
    /// initial state.
    ///
    /// Listeners hold a weak reference to the tracker: dropping the last
    /// `Rc` stops updates even while the guard is alive.
    pub fn activate<'t, T: EventTarget>(self: &Rc<Self>, target: &'t T) -> ActiveSpy<'t, T> {
        let tracker = Rc::downgrade(self);
        let listener: Listener = Rc::new(move || {
            if let Some(spy) = tracker.upgrade() {
                spy.refresh();
            }
        });

        let options = ListenerOptions { passive: true };
        let scroll = target.add_listener(EventKind::Scroll, options, Rc::clone(&listener));
        let resize = target.add_listener(EventKind::Resize, options, listener);
        self.refresh();

        ActiveSpy {
            target,
            scroll,
            resize,
        }
    }
}

/// Registration guard returned by [`ScrollSpy::activate`].
///
/// Uses RAII pattern - dropping the guard removes both listeners.
#[must_use = "dropping the guard immediately removes the listeners"]
pub struct ActiveSpy<'t, T: EventTarget> {
    target: &'t T,
    scroll: ListenerId,
    resize: ListenerId,
}

impl<T: EventTarget> Drop for ActiveSpy<'_, T> {
    fn drop(&mut self) {
        self.target.remove_listener(EventKind::Scroll, self.scroll);
        self.target.remove_listener(EventKind::Resize, self.resize);
    }
}
