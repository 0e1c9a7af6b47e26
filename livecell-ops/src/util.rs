// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livecell_core::{Cell, WeakCell};

// Builds the standard pass-through handler: forward each source emission to
// the (weakly captured) output cell.
pub(crate) fn forward_to<T>(out: &Cell<T>) -> impl Fn(&T) + Send + Sync + 'static
where
    T: Clone + Send + Sync + 'static,
{
    let weak = out.downgrade();
    move |value: &T| {
        publish(&weak, value.clone());
    }
}

// Sets `value` on the output if it is still alive.
pub(crate) fn publish<T>(weak: &WeakCell<T>, value: T)
where
    T: Clone + Send + Sync + 'static,
{
    if let Some(out) = weak.upgrade() {
        out.set(value);
    }
}
