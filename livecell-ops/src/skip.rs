// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operators: suppress a prefix of the emissions.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use livecell_core::Cell;

use crate::util::publish;

/// Extension trait providing the prefix-suppressing operators.
pub trait SkipExt<T> {
    /// Returns a derived cell suppressing the first `count` emissions
    /// (counting from attachment; a pre-existing source value counts) and
    /// forwarding the rest.
    fn skip(&self, count: usize) -> Cell<T>;

    /// Returns a derived cell suppressing emissions until `predicate` first
    /// returns `true`; the triggering value and everything after it are
    /// forwarded.
    fn skip_until(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Cell<T>;
}

impl<T> SkipExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn skip(&self, count: usize) -> Cell<T> {
        let out = Cell::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            if seen.fetch_add(1, Ordering::AcqRel) >= count {
                publish(&weak, value.clone());
            }
        });
        out
    }

    fn skip_until(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Cell<T> {
        let out = Cell::new();
        let met = Arc::new(AtomicBool::new(false));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            if met.load(Ordering::Acquire) || predicate(value) {
                met.store(true, Ordering::Release);
                publish(&weak, value.clone());
            }
        });
        out
    }
}
