// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sample-with operator: emit the latest source value when a trigger fires.

use std::sync::Arc;

use livecell_core::Cell;
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the [`sample_with`](SampleWithExt::sample_with)
/// operator.
pub trait SampleWithExt<T> {
    /// Returns a derived cell that emits this cell's most recent value each
    /// time `trigger` emits — but only if a fresh value arrived since the
    /// last publication. A trigger with nothing pending publishes nothing,
    /// so repeated triggers never duplicate a value. The trigger's payload
    /// is irrelevant.
    ///
    /// # Examples
    ///
    /// ```
    /// use livecell_core::Cell;
    /// use livecell_ops::sample_with::SampleWithExt;
    ///
    /// let values: Cell<i32> = Cell::new();
    /// let tick: Cell<()> = Cell::new();
    /// let sampled = values.sample_with(&tick);
    ///
    /// values.set(2);
    /// assert_eq!(sampled.value(), None);
    /// tick.set(());
    /// assert_eq!(sampled.value(), Some(2));
    /// ```
    fn sample_with<U>(&self, trigger: &Cell<U>) -> Cell<T>
    where
        U: Clone + Send + Sync + 'static;
}

impl<T> SampleWithExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn sample_with<U>(&self, trigger: &Cell<U>) -> Cell<T>
    where
        U: Clone + Send + Sync + 'static,
    {
        let out = Cell::new();
        let pending: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));

        {
            let pending = Arc::clone(&pending);
            out.add_source(self, move |value: &T| {
                *pending.lock() = Some(value.clone());
            });
        }
        {
            let pending = Arc::clone(&pending);
            let weak = out.downgrade();
            out.add_source(trigger, move |_: &U| {
                let taken = pending.lock().take();
                if let Some(value) = taken {
                    publish(&weak, value);
                }
            });
        }
        out
    }
}
