// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-with operator: seed a derived cell before the source emits.

use livecell_core::Cell;

use crate::util::forward_to;

/// Extension trait providing the [`start_with`](StartWithExt::start_with)
/// operator.
pub trait StartWithExt<T> {
    /// Returns a derived cell whose value is `seed` until the source emits;
    /// every source emission then overwrites it.
    ///
    /// The seed is seen exactly once, by observers attaching before the
    /// first real emission. If the source already holds a value, that value
    /// overwrites the seed immediately.
    fn start_with(&self, seed: T) -> Cell<T>;
}

impl<T> StartWithExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn start_with(&self, seed: T) -> Cell<T> {
        let out = Cell::with_value(seed);
        out.add_source(self, forward_to(&out));
        out
    }
}
