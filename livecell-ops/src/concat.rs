// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat operator: deliver one value per source, in source order.
//!
//! Every source is first coerced to single-shot semantics. Each source
//! publishes into its own index slot when it fires; after any slot fills, a
//! cursor advances through contiguous filled slots and publishes them in
//! index order, stopping at the first unfilled slot. A later source firing
//! before an earlier one is therefore buffered, never dropped or reordered.
//! Once the last slot has been delivered the derived cell goes dormant.

use std::sync::Arc;

use livecell_core::{Cell, CellError, ObserverControl, Result};
use parking_lot::Mutex;

use crate::emit_state::EmitState;
use crate::logging::trace_op;
use crate::single::{FirstExt, SingleCell};
use crate::util::publish;

struct ConcatState<T> {
    slots: Vec<EmitState<T>>,
    cursor: usize,
}

/// Concatenates the given cells: one value per source, delivered in source
/// order regardless of firing order.
///
/// # Errors
///
/// [`CellError::EmptySources`] if `sources` is empty.
///
/// # Examples
///
/// ```
/// use livecell_core::Cell;
/// use livecell_ops::concat;
///
/// let s1: Cell<i32> = Cell::new();
/// let s2: Cell<i32> = Cell::new();
/// let out = concat(&[s1.clone(), s2.clone()]).unwrap();
///
/// s2.set(20); // buffered: s1 has not fired yet
/// assert_eq!(out.value(), None);
/// s1.set(10);
/// assert_eq!(out.value(), Some(20)); // 10 then 20, in order
/// ```
pub fn concat<T>(sources: &[Cell<T>]) -> Result<Cell<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let singles: Vec<SingleCell<T>> = sources.iter().map(FirstExt::first).collect();
    concat_singles(singles)
}

/// [`concat`] over sources that are already single-shot.
///
/// # Errors
///
/// [`CellError::EmptySources`] if `sources` is empty.
pub fn concat_singles<T>(sources: Vec<SingleCell<T>>) -> Result<Cell<T>>
where
    T: Clone + Send + Sync + 'static,
{
    if sources.is_empty() {
        return Err(CellError::EmptySources);
    }

    let out = Cell::new();
    let state = Arc::new(Mutex::new(ConcatState {
        slots: vec![EmitState::Empty; sources.len()],
        cursor: 0,
    }));

    for (index, source) in sources.iter().enumerate() {
        let state = Arc::clone(&state);
        let weak = out.downgrade();
        out.add_source_with(source.cell(), move |value: &T| {
            let mut state = state.lock();
            state.slots[index].record(value.clone());
            while state.cursor < state.slots.len() {
                let Some(next) = state.slots[state.cursor].value().cloned() else {
                    break;
                };
                trace_op!(position = state.cursor, "concat delivering next slot");
                publish(&weak, next);
                state.cursor += 1;
            }
            // A single-shot source never fires twice.
            ObserverControl::Detach
        });
    }
    Ok(out)
}

/// Extension trait providing the sequential composition operators.
pub trait ConcatExt<T> {
    /// Concatenates this cell's first value with `other`'s first value; see
    /// [`concat`].
    fn then(&self, other: &Cell<T>) -> Cell<T>;

    /// Alias for [`then`](ConcatExt::then).
    fn concat_with(&self, other: &Cell<T>) -> Cell<T> {
        self.then(other)
    }
}

impl<T> ConcatExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn then(&self, other: &Cell<T>) -> Cell<T> {
        let singles = vec![self.first(), other.first()];
        match concat_singles(singles) {
            Ok(cell) => cell,
            // Unreachable: two sources by construction.
            Err(_) => Cell::new(),
        }
    }
}
