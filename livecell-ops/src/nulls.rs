// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Null-handling operators for cells with nullable payloads.
//!
//! A nullable payload is `Cell<Option<T>>`: "unset" and "holding null" are
//! distinct states, and null values flow through the other operators like
//! any other value. These two operators are where nulls get stripped or
//! replaced.

use livecell_core::Cell;

use crate::util::publish;

/// Extension trait providing the null-stripping operators on
/// `Cell<Option<T>>`.
pub trait NullExt<T> {
    /// Returns a derived cell forwarding only the non-null emissions,
    /// unwrapped.
    fn non_null(&self) -> Cell<T>;

    /// Returns a derived cell forwarding every emission, with nulls replaced
    /// by `default`.
    fn default_if_null(&self, default: T) -> Cell<T>;
}

impl<T> NullExt<T> for Cell<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    fn non_null(&self) -> Cell<T> {
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source(self, move |value: &Option<T>| {
            if let Some(inner) = value {
                publish(&weak, inner.clone());
            }
        });
        out
    }

    fn default_if_null(&self, default: T) -> Cell<T> {
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source(self, move |value: &Option<T>| {
            publish(&weak, value.clone().unwrap_or_else(|| default.clone()));
        });
        out
    }
}
