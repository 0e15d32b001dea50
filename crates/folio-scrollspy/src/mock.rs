//! In-memory layout and event target for testing.
//!
//! Provides [`StaticLayout`] and [`MockEventTarget`] for driving a
//! [`ScrollSpy`](crate::ScrollSpy) without a host document.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::layout::{
    DocumentLayout, EventKind, EventTarget, Listener, ListenerId, ListenerOptions, ScrollBehavior,
};
use crate::probe::{AnchorRect, Viewport};

/// Document with anchors at fixed absolute positions.
///
/// # Example
///
/// ```ignore
/// use folio_scrollspy::{DocumentLayout, StaticLayout};
///
/// let layout = StaticLayout::new(800.0, 3000.0).with_anchor("intro", 0.0, 500.0);
/// layout.set_scroll(200.0);
/// assert_eq!(layout.anchor_rect("intro").unwrap().top, -200.0);
/// ```
#[derive(Debug)]
pub struct StaticLayout {
    /// Anchor id to (absolute top, height).
    anchors: RefCell<HashMap<String, (f64, f64)>>,
    scroll_y: Cell<f64>,
    viewport_height: Cell<f64>,
    document_height: f64,
    scroll_requests: RefCell<Vec<String>>,
}

impl StaticLayout {
    #[must_use]
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        Self {
            anchors: RefCell::new(HashMap::new()),
            scroll_y: Cell::new(0.0),
            viewport_height: Cell::new(viewport_height),
            document_height,
            scroll_requests: RefCell::new(Vec::new()),
        }
    }

    /// Add an anchor at an absolute document position.
    #[must_use]
    pub fn with_anchor(self, id: impl Into<String>, top: f64, height: f64) -> Self {
        self.anchors.borrow_mut().insert(id.into(), (top, height));
        self
    }

    /// Unmount an anchor.
    pub fn remove_anchor(&self, id: &str) {
        self.anchors.borrow_mut().remove(id);
    }

    pub fn set_scroll(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    /// Ids passed to successful [`DocumentLayout::scroll_to_anchor`] calls.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<String> {
        self.scroll_requests.borrow().clone()
    }
}

impl DocumentLayout for StaticLayout {
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect> {
        let (top, height) = *self.anchors.borrow().get(id)?;
        let scroll_y = self.scroll_y.get();
        Some(AnchorRect::new(top - scroll_y, top + height - scroll_y))
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: self.scroll_y.get(),
            height: self.viewport_height.get(),
            document_height: self.document_height,
        }
    }

    fn scroll_to_anchor(&self, id: &str, _behavior: ScrollBehavior) -> bool {
        let Some(&(top, _)) = self.anchors.borrow().get(id) else {
            return false;
        };
        let max_scroll = (self.document_height - self.viewport_height.get()).max(0.0);
        self.scroll_y.set(top.clamp(0.0, max_scroll));
        self.scroll_requests.borrow_mut().push(id.to_owned());
        true
    }
}

struct Registration {
    id: ListenerId,
    kind: EventKind,
    options: ListenerOptions,
    listener: Listener,
}

/// Event target that records listeners and dispatches events on demand.
#[derive(Default)]
pub struct MockEventTarget {
    registrations: RefCell<Vec<Registration>>,
    next_id: Cell<u64>,
}

impl MockEventTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every listener registered for `kind`.
    pub fn dispatch(&self, kind: EventKind) {
        let listeners: Vec<Listener> = self
            .registrations
            .borrow()
            .iter()
            .filter(|reg| reg.kind == kind)
            .map(|reg| Listener::clone(&reg.listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|reg| reg.kind == kind)
            .count()
    }

    /// Whether every registered listener is passive.
    #[must_use]
    pub fn all_passive(&self) -> bool {
        self.registrations
            .borrow()
            .iter()
            .all(|reg| reg.options.passive)
    }
}

impl EventTarget for MockEventTarget {
    fn add_listener(
        &self,
        kind: EventKind,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registrations.borrow_mut().push(Registration {
            id,
            kind,
            options,
            listener,
        });
        id
    }

    fn remove_listener(&self, kind: EventKind, id: ListenerId) {
        self.registrations
            .borrow_mut()
            .retain(|reg| !(reg.kind == kind && reg.id == id));
    }
}
