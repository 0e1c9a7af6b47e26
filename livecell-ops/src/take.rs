// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operators: forward a bounded prefix of the emissions, then detach.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use livecell_core::{Cell, ObserverControl};
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the prefix-limiting operators.
pub trait TakeExt<T> {
    /// Returns a derived cell forwarding the first `count` emissions, then
    /// detaching from the source. A value held by the source at attachment
    /// time counts as the first emission.
    fn take(&self, count: usize) -> Cell<T>;

    /// Returns a derived cell forwarding emissions until `predicate` first
    /// returns `true`; the triggering value is *not* forwarded, and the
    /// source is detached.
    ///
    /// The predicate is also evaluated against the source's value at
    /// construction time, if it holds one — a source already past the
    /// condition forwards nothing at all.
    fn take_until(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Cell<T>;
}

impl<T> TakeExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn take(&self, count: usize) -> Cell<T> {
        let out = Cell::new();
        let taken = Arc::new(Mutex::new(0usize));
        let weak = out.downgrade();
        out.add_source_with(self, move |value: &T| {
            let mut taken = taken.lock();
            if *taken >= count {
                return ObserverControl::Detach;
            }
            *taken += 1;
            publish(&weak, value.clone());
            if *taken == count {
                ObserverControl::Detach
            } else {
                ObserverControl::Continue
            }
        });
        out
    }

    fn take_until(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Cell<T> {
        let met = Arc::new(AtomicBool::new(match self.value() {
            Some(ref value) => predicate(value),
            None => false,
        }));
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source_with(self, move |value: &T| {
            if predicate(value) {
                met.store(true, Ordering::Release);
            }
            if met.load(Ordering::Acquire) {
                ObserverControl::Detach
            } else {
                publish(&weak, value.clone());
                ObserverControl::Continue
            }
        });
        out
    }
}
