// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-at operator: forward exactly one emission by position.

use std::sync::Arc;

use livecell_core::{Cell, ObserverControl};
use parking_lot::Mutex;

use crate::single::SingleCell;
use crate::util::publish;

/// Extension trait providing the [`element_at`](ElementAtExt::element_at)
/// operator.
pub trait ElementAtExt<T> {
    /// Returns a single-shot cell forwarding exactly the emission at
    /// zero-based position `index`, counted from attachment.
    ///
    /// A value already held by the source is excluded from the count: only
    /// emissions after the operator is applied are indexed.
    fn element_at(&self, index: usize) -> SingleCell<T>;
}

impl<T> ElementAtExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn element_at(&self, index: usize) -> SingleCell<T> {
        let picked = Cell::new();
        // The attachment-time redelivery of a pre-existing value lands on
        // position -1 and is never matched.
        let position = Arc::new(Mutex::new(if self.has_value() { -1i64 } else { 0 }));
        let weak = picked.downgrade();
        picked.add_source_with(self, move |value: &T| {
            let mut position = position.lock();
            let matched = *position == index as i64;
            *position += 1;
            if matched {
                publish(&weak, value.clone());
                ObserverControl::Detach
            } else {
                ObserverControl::Continue
            }
        });
        SingleCell::new(&picked)
    }
}
