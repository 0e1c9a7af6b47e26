// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator: forward only values passing a predicate.

use livecell_core::Cell;

use crate::util::publish;

/// Extension trait providing the [`filter`](FilterExt::filter) operator.
pub trait FilterExt<T> {
    /// Returns a derived cell forwarding only the emissions for which
    /// `predicate` returns `true`. With a nullable payload
    /// (`T = Option<U>`), the predicate sees the null values too.
    fn filter(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Cell<T>;
}

impl<T> FilterExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn filter(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Cell<T> {
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            if predicate(value) {
                publish(&weak, value.clone());
            }
        });
        out
    }
}
