// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scan operators: stateful accumulation over the emission history.

use std::sync::Arc;

use livecell_core::Cell;
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the accumulating operators.
pub trait ScanExt<T> {
    /// Returns a derived cell applying `accumulator` to each emission after
    /// the first. The first emission only establishes the initial
    /// accumulator and is **not** published.
    fn scan(&self, accumulator: impl Fn(&T, &T) -> T + Send + Sync + 'static) -> Cell<T>;

    /// Returns a derived cell seeded with `seed` (published immediately),
    /// then publishing the updated accumulator for every emission.
    fn scan_seeded<R>(
        &self,
        seed: R,
        accumulator: impl Fn(&R, &T) -> R + Send + Sync + 'static,
    ) -> Cell<R>
    where
        R: Clone + Send + Sync + 'static;
}

impl<T> ScanExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn scan(&self, accumulator: impl Fn(&T, &T) -> T + Send + Sync + 'static) -> Cell<T> {
        let out = Cell::new();
        let accumulated: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            let mut accumulated = accumulated.lock();
            match accumulated.as_ref() {
                None => {
                    // First emission: establish the accumulator, publish
                    // nothing.
                    *accumulated = Some(value.clone());
                }
                Some(previous) => {
                    let next = accumulator(previous, value);
                    *accumulated = Some(next.clone());
                    publish(&weak, next);
                }
            }
        });
        out
    }

    fn scan_seeded<R>(
        &self,
        seed: R,
        accumulator: impl Fn(&R, &T) -> R + Send + Sync + 'static,
    ) -> Cell<R>
    where
        R: Clone + Send + Sync + 'static,
    {
        let out = Cell::with_value(seed.clone());
        let accumulated: Arc<Mutex<R>> = Arc::new(Mutex::new(seed));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            let mut accumulated = accumulated.lock();
            let next = accumulator(&accumulated, value);
            *accumulated = next.clone();
            publish(&weak, next);
        });
        out
    }
}
