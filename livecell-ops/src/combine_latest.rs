// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest operator: combine the most recent value from every source.
//!
//! # Behavior
//!
//! - The first output waits until every source has emitted at least once
//! - After that, every emission from any single source re-triggers the
//!   combining function with the latest known value from every source
//! - Emit-states are **never reset** (unlike [`zip`](crate::zip)): latest
//!   values stay sticky
//! - With `T = Option<U>` payloads, a legitimately null latest value
//!   participates in the combination like any other
//!
//! The heterogeneous two- and three-source forms are implemented directly
//! over typed emit-state tuples; [`combine_latest_all`] is the homogeneous
//! N-ary form over a slice of sources.

use std::sync::Arc;

use livecell_core::{Cell, CellError, Result};
use parking_lot::Mutex;

use crate::emit_state::EmitState;
use crate::util::publish;

/// Combines the latest values of two cells.
///
/// # Examples
///
/// ```
/// use livecell_core::Cell;
/// use livecell_ops::combine_latest;
///
/// let a: Cell<i32> = Cell::new();
/// let b: Cell<i32> = Cell::new();
/// let sum = combine_latest(&a, &b, |x, y| x + y);
///
/// a.set(2);
/// b.set(5);
/// a.set(3);
/// assert_eq!(sum.value(), Some(8)); // 3 + latest known 5
/// ```
pub fn combine_latest<A, B, Z>(
    first: &Cell<A>,
    second: &Cell<B>,
    combine: impl Fn(&A, &B) -> Z + Send + Sync + 'static,
) -> Cell<Z>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
{
    struct State<A, B> {
        first: EmitState<A>,
        second: EmitState<B>,
    }

    let out = Cell::new();
    let state = Arc::new(Mutex::new(State {
        first: EmitState::Empty,
        second: EmitState::Empty,
    }));
    let combine = Arc::new(combine);

    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(first, move |value: &A| {
            let mut state = state.lock();
            state.first.record(value.clone());
            if let (Some(a), Some(b)) = (state.first.value(), state.second.value()) {
                publish(&weak, combine(a, b));
            }
        });
    }
    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(second, move |value: &B| {
            let mut state = state.lock();
            state.second.record(value.clone());
            if let (Some(a), Some(b)) = (state.first.value(), state.second.value()) {
                publish(&weak, combine(a, b));
            }
        });
    }
    out
}

/// Combines the latest values of three cells; same policy as
/// [`combine_latest`].
pub fn combine_latest3<A, B, C, Z>(
    first: &Cell<A>,
    second: &Cell<B>,
    third: &Cell<C>,
    combine: impl Fn(&A, &B, &C) -> Z + Send + Sync + 'static,
) -> Cell<Z>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
{
    struct State<A, B, C> {
        first: EmitState<A>,
        second: EmitState<B>,
        third: EmitState<C>,
    }

    impl<A, B, C> State<A, B, C> {
        fn latest(&self) -> Option<(&A, &B, &C)> {
            match (self.first.value(), self.second.value(), self.third.value()) {
                (Some(a), Some(b), Some(c)) => Some((a, b, c)),
                _ => None,
            }
        }
    }

    let out = Cell::new();
    let state = Arc::new(Mutex::new(State {
        first: EmitState::Empty,
        second: EmitState::Empty,
        third: EmitState::Empty,
    }));
    let combine = Arc::new(combine);

    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(first, move |value: &A| {
            let mut state = state.lock();
            state.first.record(value.clone());
            if let Some((a, b, c)) = state.latest() {
                publish(&weak, combine(a, b, c));
            }
        });
    }
    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(second, move |value: &B| {
            let mut state = state.lock();
            state.second.record(value.clone());
            if let Some((a, b, c)) = state.latest() {
                publish(&weak, combine(a, b, c));
            }
        });
    }
    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(third, move |value: &C| {
            let mut state = state.lock();
            state.third.record(value.clone());
            if let Some((a, b, c)) = state.latest() {
                publish(&weak, combine(a, b, c));
            }
        });
    }
    out
}

/// Combines the latest values of a homogeneous list of cells.
///
/// `combine` receives the latest value of every source, in source order.
///
/// # Errors
///
/// [`CellError::EmptySources`] if `sources` is empty.
pub fn combine_latest_all<T, Z>(
    sources: &[Cell<T>],
    combine: impl Fn(&[T]) -> Z + Send + Sync + 'static,
) -> Result<Cell<Z>>
where
    T: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
{
    if sources.is_empty() {
        return Err(CellError::EmptySources);
    }

    let out = Cell::new();
    let state = Arc::new(Mutex::new(vec![EmitState::<T>::Empty; sources.len()]));
    let combine = Arc::new(combine);

    for (index, source) in sources.iter().enumerate() {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(source, move |value: &T| {
            let mut slots = state.lock();
            slots[index].record(value.clone());
            if slots.iter().all(EmitState::has_emitted) {
                let latest: Vec<T> = slots.iter().filter_map(|slot| slot.value().cloned()).collect();
                publish(&weak, combine(&latest));
            }
        });
    }
    Ok(out)
}
