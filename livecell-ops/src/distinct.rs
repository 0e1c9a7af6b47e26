// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct operator: suppress every value already forwarded once.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use livecell_core::Cell;
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the [`distinct`](DistinctExt::distinct)
/// operator.
pub trait DistinctExt<T> {
    /// Returns a derived cell that forwards a value only the first time it
    /// is seen, by value equality, across the whole emission history.
    ///
    /// The set of seen values grows without bound for the lifetime of the
    /// derived cell; on long-lived streams with many distinct values this is
    /// a real memory cost. Use
    /// [`distinct_until_changed`](crate::distinct_until_changed::DistinctUntilChangedExt::distinct_until_changed)
    /// when suppressing immediate repeats is enough.
    fn distinct(&self) -> Cell<T>;
}

impl<T> DistinctExt<T> for Cell<T>
where
    T: Clone + Eq + Hash + Send + Sync + 'static,
{
    fn distinct(&self) -> Cell<T> {
        let out = Cell::new();
        let seen: Arc<Mutex<HashSet<T>>> = Arc::new(Mutex::new(HashSet::new()));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            if seen.lock().insert(value.clone()) {
                publish(&weak, value.clone());
            }
        });
        out
    }
}
