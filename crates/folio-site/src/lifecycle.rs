//! Mount tracking for asynchronous page loads.
//!
//! A page starts a fetch when it mounts and applies the result when the
//! fetch completes. Fetches are not cancelled; instead each mount hands out
//! a [`MountToken`] and results are applied only while that token is still
//! current. Unmounting, or mounting again (e.g. for a different slug),
//! makes every earlier token stale.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use tracing::warn;

/// Mount generation counter shared by a page and its in-flight loads.
#[derive(Clone, Debug, Default)]
pub struct MountScope {
    generation: Arc<AtomicU64>,
}

impl MountScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new mount. Tokens from earlier mounts become stale.
    #[must_use]
    pub fn mount(&self) -> MountToken {
        let id = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        MountToken {
            generation: Arc::clone(&self.generation),
            id,
        }
    }

    /// End the current mount.
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// Proof that a load belongs to a particular mount.
#[derive(Clone, Debug)]
pub struct MountToken {
    generation: Arc<AtomicU64>,
    id: u64,
}

impl MountToken {
    /// Whether the mount this token was issued for is still active.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.id
    }

    /// Hand `value` to `apply` if the mount is still current.
    ///
    /// Returns whether the value was applied.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_current() {
            warn!(mount = self.id, "Discarding result for stale mount");
            return false;
        }
        apply(value);
        true
    }
}

/// Run `load` on a worker thread and apply its result if `token` is still
/// current when it finishes.
///
/// The handle yields whether the result was applied.
pub fn spawn_guarded<T, L, A>(token: MountToken, load: L, apply: A) -> JoinHandle<bool>
where
    T: Send + 'static,
    L: FnOnce() -> T + Send + 'static,
    A: FnOnce(T) + Send + 'static,
{
    thread::spawn(move || {
        let value = load();
        token.apply(value, apply)
    })
}
