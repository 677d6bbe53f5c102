//! Busy indicator shared by the chat and the results panel.
//!
//! Busy while at least one collaborator call is outstanding. Changes are
//! published on a watch channel so a UI can grey out its controls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct BusyIndicator {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    outstanding: AtomicUsize,
    sender: watch::Sender<bool>,
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                outstanding: AtomicUsize::new(0),
                sender,
            }),
        }
    }

    /// Returns true while any call is outstanding.
    pub fn is_busy(&self) -> bool {
        *self.inner.sender.borrow()
    }

    /// Receives every busy/idle change.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.sender.subscribe()
    }

    /// Marks one call as outstanding until the guard drops.
    pub fn begin(&self) -> BusyGuard {
        if self.inner.outstanding.fetch_add(1, Ordering::SeqCst) == 0 {
            self.inner.sender.send_replace(true);
        }
        BusyGuard {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Ends one outstanding call on drop.
#[derive(Debug)]
pub struct BusyGuard {
    inner: Arc<Inner>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.sender.send_replace(false);
        }
    }
}
