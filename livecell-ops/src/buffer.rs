// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Buffer operator: batch emissions into fixed-size lists.

use std::sync::Arc;

use livecell_core::{Cell, CellError, Result};
use parking_lot::Mutex;

use crate::util::publish;

/// Extension trait providing the [`buffer`](BufferExt::buffer) operator.
pub trait BufferExt<T> {
    /// Returns a derived cell accumulating emissions into an ordered list;
    /// each time the list reaches `count` elements, a snapshot is published
    /// and the accumulator is cleared. Nothing is published for a partially
    /// filled buffer.
    ///
    /// # Errors
    ///
    /// [`CellError::InvalidArgument`] if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use livecell_core::Cell;
    /// use livecell_ops::buffer::BufferExt;
    ///
    /// let source: Cell<i32> = Cell::new();
    /// let batches = source.buffer(3).unwrap();
    ///
    /// for value in 1..=6 {
    ///     source.set(value);
    /// }
    /// assert_eq!(batches.value(), Some(vec![4, 5, 6]));
    /// ```
    fn buffer(&self, count: usize) -> Result<Cell<Vec<T>>>;
}

impl<T> BufferExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn buffer(&self, count: usize) -> Result<Cell<Vec<T>>> {
        if count == 0 {
            return Err(CellError::invalid_argument("buffer size must be non-zero"));
        }
        let out = Cell::new();
        let pending: Arc<Mutex<Vec<T>>> = Arc::new(Mutex::new(Vec::with_capacity(count)));
        let weak = out.downgrade();
        out.add_source(self, move |value: &T| {
            let mut pending = pending.lock();
            pending.push(value.clone());
            if pending.len() == count {
                let snapshot = std::mem::take(&mut *pending);
                publish(&weak, snapshot);
            }
        });
        Ok(out)
    }
}
