// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator: combine sources pairwise, requiring a fresh emission from
//! every source for each output.
//!
//! # Behavior
//!
//! - Each source's emission is recorded in its [`EmitState`] slot
//! - When every slot is filled, the combining function runs on the recorded
//!   values, the result is published, and **all slots are reset** — the next
//!   output needs a fresh emission from every source again
//! - The readiness gate is "has emitted", never a null check: with
//!   `T = Option<U>` payloads, zip combines null values like any others
//! - Record, readiness check, publish and reset form one critical section,
//!   so near-simultaneous emissions from different threads cannot both skip
//!   (or both claim) a combination
//!
//! The difference between `combine_latest` and `zip` is that zip only emits
//! after all sources have a new value, while `combine_latest` emits again on
//! every single-source update.

use std::sync::Arc;

use livecell_core::Cell;
use parking_lot::Mutex;

use crate::emit_state::EmitState;
use crate::util::publish;

struct Zip2State<A, B> {
    first: EmitState<A>,
    second: EmitState<B>,
}

/// Zips two cells with a combining function.
///
/// # Examples
///
/// ```
/// use livecell_core::Cell;
/// use livecell_ops::zip;
///
/// let a: Cell<i32> = Cell::new();
/// let b: Cell<i32> = Cell::new();
/// let sum = zip(&a, &b, |x, y| x + y);
///
/// a.set(2);
/// assert_eq!(sum.value(), None); // b has not emitted
/// b.set(5);
/// assert_eq!(sum.value(), Some(7));
/// a.set(3);
/// assert_eq!(sum.value(), Some(7)); // b has not re-emitted
/// ```
pub fn zip<A, B, Z>(
    first: &Cell<A>,
    second: &Cell<B>,
    combine: impl Fn(&A, &B) -> Z + Send + Sync + 'static,
) -> Cell<Z>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
{
    let out = Cell::new();
    let state = Arc::new(Mutex::new(Zip2State {
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
            try_zip2(&mut state, &weak, combine.as_ref());
        });
    }
    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(second, move |value: &B| {
            let mut state = state.lock();
            state.second.record(value.clone());
            try_zip2(&mut state, &weak, combine.as_ref());
        });
    }
    out
}

fn try_zip2<A, B, Z, F>(state: &mut Zip2State<A, B>, weak: &livecell_core::WeakCell<Z>, combine: &F)
where
    F: Fn(&A, &B) -> Z,
    Z: Clone + Send + Sync + 'static,
{
    if !(state.first.has_emitted() && state.second.has_emitted()) {
        return;
    }
    if let (EmitState::Has(a), EmitState::Has(b)) = (state.first.reset(), state.second.reset()) {
        publish(weak, combine(&a, &b));
    }
}

struct Zip3State<A, B, C> {
    first: EmitState<A>,
    second: EmitState<B>,
    third: EmitState<C>,
}

/// Zips three cells with a combining function; same policy as [`zip`].
pub fn zip3<A, B, C, Z>(
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
    let out = Cell::new();
    let state = Arc::new(Mutex::new(Zip3State {
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
            try_zip3(&mut state, &weak, combine.as_ref());
        });
    }
    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(second, move |value: &B| {
            let mut state = state.lock();
            state.second.record(value.clone());
            try_zip3(&mut state, &weak, combine.as_ref());
        });
    }
    {
        let state = Arc::clone(&state);
        let combine = Arc::clone(&combine);
        let weak = out.downgrade();
        out.add_source(third, move |value: &C| {
            let mut state = state.lock();
            state.third.record(value.clone());
            try_zip3(&mut state, &weak, combine.as_ref());
        });
    }
    out
}

fn try_zip3<A, B, C, Z, F>(
    state: &mut Zip3State<A, B, C>,
    weak: &livecell_core::WeakCell<Z>,
    combine: &F,
) where
    F: Fn(&A, &B, &C) -> Z,
    Z: Clone + Send + Sync + 'static,
{
    if !(state.first.has_emitted() && state.second.has_emitted() && state.third.has_emitted()) {
        return;
    }
    if let (EmitState::Has(a), EmitState::Has(b), EmitState::Has(c)) =
        (state.first.reset(), state.second.reset(), state.third.reset())
    {
        publish(weak, combine(&a, &b, &c));
    }
}

/// Zips two cells into a cell of pairs.
pub fn zip_pair<A, B>(first: &Cell<A>, second: &Cell<B>) -> Cell<(A, B)>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
{
    zip(first, second, |a, b| (a.clone(), b.clone()))
}

/// Zips three cells into a cell of triples.
pub fn zip_triple<A, B, C>(first: &Cell<A>, second: &Cell<B>, third: &Cell<C>) -> Cell<(A, B, C)>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    zip3(first, second, third, |a, b, c| {
        (a.clone(), b.clone(), c.clone())
    })
}
