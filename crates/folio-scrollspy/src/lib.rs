//! Scroll-spy tracking for table-of-contents navigation.
//!
//! Given the sections of a page in document order, [`ScrollSpy`] computes
//! which one is active from anchor positions reported by a
//! [`DocumentLayout`], and publishes the result as a [`ScrollState`] through
//! a `tokio::sync::watch` channel. All table-of-contents views read from the
//! same channel, so they never disagree.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use folio_scrollspy::{
//!     AnchorRect, DocumentLayout, ScrollBehavior, ScrollSpy, Section, SpyConfig, Viewport,
//! };
//!
//! struct TwoSections;
//!
//! impl DocumentLayout for TwoSections {
//!     fn anchor_rect(&self, id: &str) -> Option<AnchorRect> {
//!         match id {
//!             "intro" => Some(AnchorRect::new(-300.0, 40.0)),
//!             "usage" => Some(AnchorRect::new(40.0, 900.0)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn viewport(&self) -> Viewport {
//!         Viewport { scroll_y: 300.0, height: 800.0, document_height: 4000.0 }
//!     }
//!
//!     fn scroll_to_anchor(&self, _id: &str, _behavior: ScrollBehavior) -> bool {
//!         false
//!     }
//! }
//!
//! let sections = vec![Section::new("intro", "Intro"), Section::new("usage", "Usage")];
//! let spy = Rc::new(ScrollSpy::new(sections, TwoSections, SpyConfig::default()));
//! let toc = spy.subscribe();
//!
//! spy.refresh();
//! assert_eq!(toc.borrow().active_id(), "usage");
//! ```

mod layout;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod probe;
mod section;
mod tracker;

pub use layout::{
    DocumentLayout, EventKind, EventTarget, Listener, ListenerId, ListenerOptions, ScrollBehavior,
};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockEventTarget, StaticLayout};
pub use probe::{AnchorRect, SpyConfig, Viewport, locate_active};
pub use section::{ScrollState, Section};
pub use tracker::{ActiveSpy, ScrollSpy};
