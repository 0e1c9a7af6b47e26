// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Amb operator: first source to emit wins, all others are discarded.
//!
//! # Behavior
//!
//! - If any source already holds a value at attachment, the lowest-indexed
//!   such source seeds the initial output value; seeding does not resolve
//!   the race
//! - The race resolves on the first eligible emission after wiring: the
//!   emitting source becomes the winner, every other source is detached
//!   immediately and never considered again, and only the winner's values
//!   are published from then on
//! - With [`AmbNulls::Ignore`], null emissions are not eligible to win (the
//!   source stays in the race); whether an initially-held null may seed the
//!   output is an explicit option, since it is genuinely a policy choice

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use livecell_core::{Cell, CellError, ObserverControl, Result, SourceKey};
use parking_lot::Mutex;

use crate::logging::trace_op;
use crate::util::publish;

/// Null-handling policy for [`amb_nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbNulls {
    /// Null emissions compete and win like any other value.
    Consider,
    /// Null emissions neither win nor get published; the emitting source
    /// stays in the race.
    Ignore {
        /// Whether a source that already holds a null at attachment time may
        /// seed the initial output value (it still cannot win the race).
        initial_null_seeds: bool,
    },
}

/// Races the given cells: only the first source to emit after wiring is ever
/// forwarded.
///
/// # Errors
///
/// [`CellError::EmptySources`] if `sources` is empty.
pub fn amb<T>(sources: &[Cell<T>]) -> Result<Cell<T>>
where
    T: Clone + Send + Sync + 'static,
{
    if sources.is_empty() {
        return Err(CellError::EmptySources);
    }
    let seed = sources.iter().find_map(Cell::value);
    Ok(race(sources, Arc::new(|_| true), seed))
}

/// [`amb`] over nullable payloads, with an explicit null policy.
///
/// # Errors
///
/// [`CellError::EmptySources`] if `sources` is empty.
pub fn amb_nullable<T>(sources: &[Cell<Option<T>>], nulls: AmbNulls) -> Result<Cell<Option<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    if sources.is_empty() {
        return Err(CellError::EmptySources);
    }
    let seed = match nulls {
        AmbNulls::Consider
        | AmbNulls::Ignore {
            initial_null_seeds: true,
        } => sources.iter().find_map(Cell::value),
        AmbNulls::Ignore {
            initial_null_seeds: false,
        } => sources.iter().find_map(|s| s.value().filter(Option::is_some)),
    };
    let eligible: Arc<dyn Fn(&Option<T>) -> bool + Send + Sync> = match nulls {
        AmbNulls::Consider => Arc::new(|_| true),
        AmbNulls::Ignore { .. } => Arc::new(|value: &Option<T>| value.is_some()),
    };
    Ok(race(sources, eligible, seed))
}

struct RaceState {
    winner: Option<usize>,
    keys: Vec<SourceKey>,
}

fn race<T>(
    sources: &[Cell<T>],
    eligible: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    seed: Option<T>,
) -> Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    let out = match seed {
        Some(value) => Cell::with_value(value),
        None => Cell::new(),
    };
    let state = Arc::new(Mutex::new(RaceState {
        winner: None,
        keys: Vec::with_capacity(sources.len()),
    }));
    // Attachment-time redeliveries of pre-existing values must not resolve
    // the race (they seed the output instead); the handlers stay disarmed
    // until every source is wired.
    let armed = Arc::new(AtomicBool::new(false));

    for (index, source) in sources.iter().enumerate() {
        let keys_state = Arc::clone(&state);
        let state = Arc::clone(&state);
        let eligible = Arc::clone(&eligible);
        let armed = Arc::clone(&armed);
        let weak = out.downgrade();
        let key = out.add_source_with(source, move |value: &T| {
            if !armed.load(Ordering::Acquire) {
                return ObserverControl::Continue;
            }
            if !eligible(value) {
                return ObserverControl::Continue;
            }
            let mut state = state.lock();
            match state.winner {
                Some(winner) if winner != index => return ObserverControl::Detach,
                Some(_) => {}
                None => {
                    state.winner = Some(index);
                    trace_op!(winner = index, "amb race resolved");
                    if let Some(out) = weak.upgrade() {
                        for (loser, key) in state.keys.iter().enumerate() {
                            if loser != index {
                                out.remove_source(*key);
                            }
                        }
                    }
                }
            }
            publish(&weak, value.clone());
            ObserverControl::Continue
        });
        keys_state.lock().keys.push(key);
    }
    armed.store(true, Ordering::Release);
    out
}
