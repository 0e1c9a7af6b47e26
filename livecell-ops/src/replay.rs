// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Replay operator: republish the whole emission history on every emission.

use std::sync::Arc;

use livecell_core::Cell;
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the [`replay`](ReplayExt::replay) operator.
pub trait ReplayExt<T> {
    /// Returns a derived cell holding the ordered list of every emission so
    /// far, republished in full on every new emission. The log grows without
    /// bound for the lifetime of the derived cell.
    fn replay(&self) -> Cell<Vec<T>>;
}

impl<T> ReplayExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn replay(&self) -> Cell<Vec<T>> {
        let out = Cell::new();
        let log: Arc<Mutex<Vec<T>>> = Arc::new(Mutex::new(Vec::new()));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            let mut log = log.lock();
            log.push(value.clone());
            publish(&weak, log.clone());
        });
        out
    }
}
