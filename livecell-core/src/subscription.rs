// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposable handle for an attached observer.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle to an observer attached to a [`Cell`](crate::Cell).
///
/// The handle owns the attachment: dropping it (or calling
/// [`dispose`](Subscription::dispose)) detaches the observer immediately.
/// Detachment is effective even against a broadcast already in flight; the
/// delivery loop checks a shared disposed flag before every callback.
///
/// For "observe forever" semantics, call [`forget`](Subscription::forget) to
/// keep the observer attached for the lifetime of the cell.
///
/// The handle keeps the observed cell alive: a pipeline stays wired as long
/// as its terminal cell (which owns the intermediate subscriptions through
/// its source bindings) is held somewhere.
#[must_use = "dropping a Subscription detaches the observer; call `forget` to keep it attached"]
pub struct Subscription {
    disposed: Arc<AtomicBool>,
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub(crate) fn new(disposed: Arc<AtomicBool>, detach: impl FnOnce() + Send + 'static) -> Self {
        Self {
            disposed,
            detach: Some(Box::new(detach)),
        }
    }

    /// Detaches the observer. Idempotent.
    pub fn dispose(mut self) {
        self.dispose_in_place();
    }

    /// Returns `true` if the observer has been detached, either through this
    /// handle or from inside the delivery callback
    /// ([`ObserverControl::Detach`](crate::ObserverControl::Detach)).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Keeps the observer attached for the lifetime of the cell, giving up
    /// the ability to detach it.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn dispose_in_place(&mut self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose_in_place();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
