// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct-until-changed operator: suppress consecutive duplicates.

use std::sync::Arc;

use livecell_core::Cell;
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the
/// [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed)
/// operator.
pub trait DistinctUntilChangedExt<T> {
    /// Returns a derived cell that forwards a value only when it differs
    /// from the last forwarded one. Only immediate repeats are suppressed;
    /// a value may recur after an intervening different value.
    ///
    /// # Examples
    ///
    /// ```
    /// use livecell_core::Cell;
    /// use livecell_ops::prelude::*;
    /// use livecell_test_utils::Recorder;
    ///
    /// let source: Cell<i32> = Cell::new();
    /// let changes = source.distinct_until_changed();
    /// let recorder = Recorder::attach(&changes);
    ///
    /// for value in [1, 1, 2, 2, 2, 3, 2] {
    ///     source.set(value);
    /// }
    /// assert_eq!(recorder.values(), vec![1, 2, 3, 2]);
    /// ```
    fn distinct_until_changed(&self) -> Cell<T>;
}

impl<T> DistinctUntilChangedExt<T> for Cell<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn distinct_until_changed(&self) -> Cell<T> {
        let out = Cell::new();
        let last: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            let mut last = last.lock();
            if last.as_ref() != Some(value) {
                *last = Some(value.clone());
                publish(&weak, value.clone());
            }
        });
        out
    }
}
