// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-source emission bookkeeping for multi-source combinators.

/// Records whether one source has emitted since the combinator's last reset,
/// and if so what it emitted last.
///
/// This is a tagged variant rather than a `(bool, Option<T>)` pair so that a
/// source which legitimately emits a "null" payload (`T = Option<U>`) still
/// counts as having emitted: the readiness gate of `zip`/`combine_latest` is
/// [`has_emitted`](EmitState::has_emitted), never a null check.
///
/// `zip` resets every slot to [`Empty`](EmitState::Empty) after each
/// combination, so each output needs a fresh emission from every source;
/// `combine_latest` never resets, so latest values stay sticky.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EmitState<T> {
    /// The source has not emitted since the last reset.
    #[default]
    Empty,
    /// The source emitted; holds the most recent value.
    Has(T),
}

impl<T> EmitState<T> {
    /// Records an emission, replacing any previous value.
    pub fn record(&mut self, value: T) {
        *self = EmitState::Has(value);
    }

    /// `true` once the source has emitted since the last reset.
    pub fn has_emitted(&self) -> bool {
        matches!(self, EmitState::Has(_))
    }

    /// The last recorded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            EmitState::Has(value) => Some(value),
            EmitState::Empty => None,
        }
    }

    /// Takes the current state, leaving [`Empty`](EmitState::Empty) behind.
    pub fn reset(&mut self) -> EmitState<T> {
        core::mem::take(self)
    }
}
