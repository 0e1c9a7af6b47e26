// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operators: reshape a single source's emissions.

use std::sync::Arc;

use livecell_core::{Cell, Subscription};
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the value-mapping operators.
pub trait MapExt<T> {
    /// Returns a derived cell holding `transform` applied to every emission.
    fn map<O>(&self, transform: impl Fn(&T) -> O + Send + Sync + 'static) -> Cell<O>
    where
        O: Clone + Send + Sync + 'static;

    /// Returns a derived cell that, for every emission, switches to the cell
    /// produced by `transform`: the previous inner binding is removed, and
    /// the new inner cell's current value and subsequent emissions are
    /// forwarded.
    fn switch_map<O>(&self, transform: impl Fn(&T) -> Cell<O> + Send + Sync + 'static) -> Cell<O>
    where
        O: Clone + Send + Sync + 'static;
}

impl<T> MapExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn map<O>(&self, transform: impl Fn(&T) -> O + Send + Sync + 'static) -> Cell<O>
    where
        O: Clone + Send + Sync + 'static,
    {
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            publish(&weak, transform(value));
        });
        out
    }

    fn switch_map<O>(&self, transform: impl Fn(&T) -> Cell<O> + Send + Sync + 'static) -> Cell<O>
    where
        O: Clone + Send + Sync + 'static,
    {
        let out = Cell::new();
        // Holds the binding to the currently selected inner cell; replaced
        // (and thereby disposed) on every outer emission.
        let inner: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            if let Some(previous) = inner.lock().take() {
                previous.dispose();
            }
            let selected = transform(value);
            let weak = weak.clone();
            let subscription = selected.observe(move |inner_value: &O| {
                publish(&weak, inner_value.clone());
            });
            *inner.lock() = Some(subscription);
        });
        out
    }
}
