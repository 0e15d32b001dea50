//! Seams to the host document: layout queries and event registration.

use std::rc::Rc;

use crate::probe::{AnchorRect, Viewport};

/// How a programmatic scroll is animated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Layout queries against the host document.
pub trait DocumentLayout {
    /// Bounds of the element with `id`, relative to the viewport top.
    ///
    /// Returns `None` if no such element is mounted.
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect>;

    /// Current scroll position and extents.
    fn viewport(&self) -> Viewport;

    /// Scroll so the element with `id` aligns with the viewport top.
    ///
    /// Returns `false` if no such element is mounted.
    fn scroll_to_anchor(&self, id: &str, behavior: ScrollBehavior) -> bool;
}

impl<L: DocumentLayout + ?Sized> DocumentLayout for Rc<L> {
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect> {
        (**self).anchor_rect(id)
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn scroll_to_anchor(&self, id: &str, behavior: ScrollBehavior) -> bool {
        (**self).scroll_to_anchor(id, behavior)
    }
}

/// Host events that can move sections relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
}

/// Registration options for a listener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The listener never cancels the event.
    pub passive: bool,
}

/// Handle identifying a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Event callback.
pub type Listener = Rc<dyn Fn()>;

/// Source of scroll and resize events.
pub trait EventTarget {
    fn add_listener(&self, kind: EventKind, options: ListenerOptions, listener: Listener)
    -> ListenerId;

    fn remove_listener(&self, kind: EventKind, id: ListenerId);
}
