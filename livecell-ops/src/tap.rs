// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tap operators: side effects around forwarding, without changing the
//! value.

use livecell_core::Cell;

use crate::util::publish;

/// Extension trait providing the side-effect operators.
pub trait TapExt<T> {
    /// Returns a derived cell invoking `action` strictly **before** each
    /// value is forwarded to the derived cell's own observers. The value is
    /// forwarded exactly once, unchanged.
    fn do_before_next(&self, action: impl Fn(&T) + Send + Sync + 'static) -> Cell<T>;

    /// Returns a derived cell invoking `action` strictly **after** each
    /// value is forwarded to the derived cell's own observers.
    fn do_after_next(&self, action: impl Fn(&T) + Send + Sync + 'static) -> Cell<T>;
}

impl<T> TapExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn do_before_next(&self, action: impl Fn(&T) + Send + Sync + 'static) -> Cell<T> {
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            action(value);
            publish(&weak, value.clone());
        });
        out
    }

    fn do_after_next(&self, action: impl Fn(&T) + Send + Sync + 'static) -> Cell<T> {
        let out = Cell::new();
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            publish(&weak, value.clone());
            action(value);
        });
        out
    }
}
