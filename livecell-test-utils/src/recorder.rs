// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Recording observer for cells under test.

use std::sync::Arc;

use livecell_core::{Cell, Subscription};
use parking_lot::Mutex;

/// Observer that records every emission of a cell, in delivery order.
///
/// Attaching the recorder also captures the cell's current value, if any
/// (attachment-time delivery), so `values()` reflects exactly what a real
/// observer would have seen.
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
    subscription: Subscription,
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    /// Attaches a fresh recorder to `cell`.
    pub fn attach(cell: &Cell<T>) -> Self {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        let subscription = cell.observe(move |value| sink.lock().push(value.clone()));
        Self {
            values,
            subscription,
        }
    }

    /// All recorded emissions, oldest first.
    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    /// Most recent emission, if any.
    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    /// Number of recorded emissions.
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Detaches the recorder; recorded values stay readable.
    pub fn detach(self) -> Vec<T> {
        self.subscription.dispose();
        let values = self.values.lock().clone();
        values
    }
}
