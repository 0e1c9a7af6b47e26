// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-shot cells: deliver at most one value, then stop observing.

use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use livecell_core::{Cell, ObserverControl};

use crate::map::MapExt;
use crate::take::TakeExt;
use crate::util::publish;

/// A derived cell guaranteed to publish at most one value.
///
/// If the source already holds a value when wrapped, that value is adopted
/// immediately and no subscription is made. Otherwise the single-shot cell
/// subscribes, copies the first emission, and detaches; further source
/// emissions are never observed. A delivered flag guards against a second
/// notification racing the detachment.
///
/// `SingleCell` is a distinct type rather than a runtime-inspected property,
/// so operators that need "already single-shot" sources (like
/// [`concat`](crate::concat)) take it by type and double wrapping never
/// arises.
///
/// It dereferences to [`Cell`], so observation and further chaining work
/// unchanged.
#[derive(Clone)]
pub struct SingleCell<T> {
    cell: Cell<T>,
}

impl<T: Clone + Send + Sync + 'static> SingleCell<T> {
    /// Wraps `source` with single-shot semantics.
    pub fn new(source: &Cell<T>) -> Self {
        let cell = Cell::new();
        if let Some(value) = source.value() {
            // Adopt the pre-existing value; no subscription needed.
            cell.set(value);
            return Self { cell };
        }

        let delivered = Arc::new(AtomicBool::new(false));
        let weak = cell.downgrade();
        cell.add_source_with(source, move |value: &T| {
            if delivered.swap(true, Ordering::AcqRel) {
                return ObserverControl::Detach;
            }
            publish(&weak, value.clone());
            ObserverControl::Detach
        });
        Self { cell }
    }

    /// The underlying derived cell.
    #[must_use]
    pub fn cell(&self) -> &Cell<T> {
        &self.cell
    }

    /// Unwraps into the underlying derived cell.
    #[must_use]
    pub fn into_cell(self) -> Cell<T> {
        self.cell
    }
}

impl<T> Deref for SingleCell<T> {
    type Target = Cell<T>;

    fn deref(&self) -> &Self::Target {
        &self.cell
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SingleCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SingleCell").field(&self.cell).finish()
    }
}

/// Extension trait providing the single-shot conversions.
pub trait FirstExt<T> {
    /// Wraps this cell so that at most its first (or pre-existing) value is
    /// delivered; see [`SingleCell`].
    fn first(&self) -> SingleCell<T>;

    /// Alias for [`first`](FirstExt::first).
    fn to_single(&self) -> SingleCell<T> {
        self.first()
    }
}

impl<T> FirstExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn first(&self) -> SingleCell<T> {
        SingleCell::new(self)
    }
}

/// Extension trait providing
/// [`first_or_default`](FirstOrDefaultExt::first_or_default) on cells with
/// nullable payloads.
pub trait FirstOrDefaultExt<T> {
    /// Like [`first`](FirstExt::first), with null first values replaced by
    /// `default`.
    fn first_or_default(&self, default: T) -> SingleCell<T>;
}

impl<T> FirstOrDefaultExt<T> for Cell<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    fn first_or_default(&self, default: T) -> SingleCell<T> {
        let defaulted = self
            .take(1)
            .map(move |value: &Option<T>| value.clone().unwrap_or_else(|| default.clone()));
        SingleCell::new(&defaulted)
    }
}
