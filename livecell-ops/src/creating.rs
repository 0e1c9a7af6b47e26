// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Constructors for ready-made cells.

use livecell_core::Cell;

/// Creates a cell already holding `value`.
pub fn just<T>(value: T) -> Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    Cell::with_value(value)
}

/// Creates a cell holding the result of `producer`, evaluated immediately.
pub fn from_fn<T>(producer: impl FnOnce() -> T) -> Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    Cell::with_value(producer())
}

/// Creates a cell that has emitted every integer in `start..=end`, in order.
///
/// A cell holds only its latest value, so observers attaching afterwards see
/// `end`; the intermediate values only reach observers attached before the
/// call.
pub fn range_of(start: i32, end: i32) -> Cell<i32> {
    let cell = Cell::new();
    for value in start..=end {
        cell.set(value);
    }
    cell
}

/// Extension trait providing [`to_cell`](ToCellExt::to_cell).
pub trait ToCellExt<T> {
    /// Returns a fresh, independent cell seeded with this cell's current
    /// value (unset if the source is unset). Later source emissions do not
    /// reach it.
    fn to_cell(&self) -> Cell<T>;
}

impl<T> ToCellExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn to_cell(&self) -> Cell<T> {
        match self.value() {
            Some(value) => Cell::with_value(value),
            None => Cell::new(),
        }
    }
}
