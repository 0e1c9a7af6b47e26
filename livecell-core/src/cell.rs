// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The observable cell: a single-slot value container with synchronous
//! multicast notification.
//!
//! ## Characteristics
//!
//! - **Single slot**: a cell holds at most one current value. "Unset" and
//!   "holding a value" are distinct states; a nullable payload is modeled as
//!   `Cell<Option<T>>`, so "unset" and "holding null" stay distinguishable.
//! - **Synchronous**: [`Cell::set`] notifies every live observer before it
//!   returns, in attachment order, depth-first through derived cells.
//! - **At-most-once**: per-observer version tracking guarantees each logical
//!   value change reaches an observer at most once, even when `set` is called
//!   concurrently from several threads.
//! - **Cheap to clone**: all clones share the same slot and observer set.
//!
//! ## Example
//!
//! ```
//! use livecell_core::Cell;
//!
//! let cell: Cell<i32> = Cell::new();
//! let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
//!
//! let sink = std::sync::Arc::clone(&seen);
//! let subscription = cell.observe(move |value| sink.lock().push(*value));
//!
//! cell.set(1);
//! cell.set(2);
//! assert_eq!(*seen.lock(), vec![1, 2]);
//! assert_eq!(cell.value(), Some(2));
//!
//! subscription.dispose();
//! cell.set(3);
//! assert_eq!(*seen.lock(), vec![1, 2]);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::logging::{trace_cell, warn_cell};
use crate::source::{SourceKey, SourceRegistry};
use crate::subscription::Subscription;

/// Return value of a stateful observer callback, deciding whether the
/// observer stays attached.
///
/// This is how self-terminating operators (take, single-shot, race losers)
/// detach from inside the delivery path: returning [`Detach`] removes the
/// observer before the next broadcast, without needing access to the
/// [`Subscription`] handle.
///
/// [`Detach`]: ObserverControl::Detach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverControl {
    /// Keep observing.
    Continue,
    /// Detach this observer; no further values are delivered to it.
    Detach,
}

type Callback<T> = Arc<dyn Fn(&T) -> ObserverControl + Send + Sync>;

struct ObserverEntry<T> {
    id: u64,
    callback: Callback<T>,
    disposed: Arc<AtomicBool>,
    last_version: Arc<AtomicU64>,
}

impl<T> Clone for ObserverEntry<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
            disposed: Arc::clone(&self.disposed),
            last_version: Arc::clone(&self.last_version),
        }
    }
}

struct CellState<T> {
    // `version` 0 means the cell has never been set.
    value: Option<T>,
    version: u64,
    observers: Vec<ObserverEntry<T>>,
}

pub(crate) struct Shared<T> {
    state: Mutex<CellState<T>>,
    next_observer_id: AtomicU64,
    sources: Mutex<SourceRegistry>,
}

impl<T> Shared<T> {
    fn remove_observer(&self, id: u64) -> bool {
        let mut state = self.state.lock();
        if let Some(position) = state.observers.iter().position(|entry| entry.id == id) {
            let entry = state.observers.remove(position);
            entry.disposed.store(true, Ordering::Release);
            true
        } else {
            false
        }
    }
}

/// A single-slot observable value container.
///
/// See the [module documentation](self) for semantics and an example.
pub struct Cell<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Cell<T> {
    /// Creates an unset cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(CellState {
                    value: None,
                    version: 0,
                    observers: Vec::new(),
                }),
                next_observer_id: AtomicU64::new(0),
                sources: Mutex::new(SourceRegistry::default()),
            }),
        }
    }

    /// Creates a cell pre-seeded with `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        let cell = Self::new();
        cell.set(value);
        cell
    }

    /// Returns a clone of the current value, or `None` if the cell is unset.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.shared.state.lock().value.clone()
    }

    /// Returns `true` if the cell has ever been set.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.shared.state.lock().version > 0
    }

    /// Stores `value` and synchronously notifies every live observer, in
    /// attachment order, before returning.
    ///
    /// Observers attached while the broadcast is running do not receive this
    /// value from the broadcast (they received the current value at
    /// attachment time instead). An observer detached mid-broadcast receives
    /// nothing further.
    pub fn set(&self, value: T) {
        let broadcast = value.clone();
        let (version, observers) = {
            let mut state = self.shared.state.lock();
            state.version += 1;
            state.value = Some(value);
            (state.version, state.observers.clone())
        };
        trace_cell!(
            version,
            observers = observers.len(),
            "cell publishing new value"
        );
        for entry in &observers {
            self.deliver(entry, &broadcast, version);
        }
    }

    // Delivers one (value, version) to one observer, subject to the
    // at-most-once gate: the entry's high-water version mark only ever moves
    // forward, so a stale broadcast racing a newer one is skipped.
    fn deliver(&self, entry: &ObserverEntry<T>, value: &T, version: u64) {
        if entry.disposed.load(Ordering::Acquire) {
            return;
        }
        if entry.last_version.fetch_max(version, Ordering::AcqRel) >= version {
            return;
        }
        if let ObserverControl::Detach = (entry.callback)(value) {
            self.shared.remove_observer(entry.id);
        }
    }

    /// Attaches an always-active observer, returning its [`Subscription`].
    ///
    /// If the cell holds a value at attachment time, `observer` is invoked
    /// with it immediately, before this method returns.
    pub fn observe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.observe_with(move |value| {
            observer(value);
            ObserverControl::Continue
        })
    }

    /// Like [`observe`](Cell::observe), but the callback decides after each
    /// delivery whether to stay attached.
    pub fn observe_with(
        &self,
        observer: impl Fn(&T) -> ObserverControl + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.shared.next_observer_id.fetch_add(1, Ordering::Relaxed);
        let entry = ObserverEntry {
            id,
            callback: Arc::new(observer),
            disposed: Arc::new(AtomicBool::new(false)),
            last_version: Arc::new(AtomicU64::new(0)),
        };
        let disposed = Arc::clone(&entry.disposed);

        // Registration and the attachment-time snapshot happen in one
        // critical section, so the snapshot cannot skip a concurrent set:
        // either the set's broadcast sees the new entry, or the snapshot sees
        // the new value, and the version gate deduplicates the overlap.
        let snapshot = {
            let mut state = self.shared.state.lock();
            let snapshot = if state.version > 0 {
                state.value.clone().map(|value| (value, state.version))
            } else {
                None
            };
            state.observers.push(entry.clone());
            snapshot
        };
        if let Some((value, version)) = snapshot {
            self.deliver(&entry, &value, version);
        }

        let shared = Arc::clone(&self.shared);
        Subscription::new(disposed, move || {
            shared.remove_observer(id);
        })
    }

    /// Attaches `source` as an upstream of this (derived) cell.
    ///
    /// `handler` is invoked for every emission of `source` — including its
    /// current value at attachment time, if any. The binding is owned by this
    /// cell: it is released by [`remove_source`](Cell::remove_source),
    /// [`clear_sources`](Cell::clear_sources), or when the cell is dropped.
    pub fn add_source<S>(
        &self,
        source: &Cell<S>,
        handler: impl Fn(&S) + Send + Sync + 'static,
    ) -> SourceKey
    where
        S: Clone + Send + Sync + 'static,
    {
        self.add_source_with(source, move |value| {
            handler(value);
            ObserverControl::Continue
        })
    }

    /// Like [`add_source`](Cell::add_source), but the handler decides after
    /// each delivery whether the binding stays attached.
    pub fn add_source_with<S>(
        &self,
        source: &Cell<S>,
        handler: impl Fn(&S) -> ObserverControl + Send + Sync + 'static,
    ) -> SourceKey
    where
        S: Clone + Send + Sync + 'static,
    {
        let subscription = source.observe_with(handler);
        self.shared.sources.lock().insert(subscription)
    }

    /// Removes one source binding, detaching from the upstream immediately.
    ///
    /// Returns `false` if the key does not identify a live binding.
    pub fn remove_source(&self, key: SourceKey) -> bool {
        let removed = self.shared.sources.lock().remove(key);
        match removed {
            Some(subscription) => {
                subscription.dispose();
                true
            }
            None => {
                warn_cell!(?key, "remove_source: no such binding");
                false
            }
        }
    }

    /// Removes all source bindings.
    pub fn clear_sources(&self) {
        let drained = self.shared.sources.lock().drain();
        for subscription in drained {
            subscription.dispose();
        }
    }

    /// Number of live source bindings of this derived cell.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.shared.sources.lock().len()
    }

    /// Number of currently attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.state.lock().observers.len()
    }

    /// A cell is active while it has at least one live observer.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.observer_count() > 0
    }

    /// Returns a weak handle that does not keep the cell alive.
    ///
    /// Operator callbacks capture their output cell weakly; the strong
    /// references all point upstream (through source bindings), so pipelines
    /// cannot form reference cycles.
    #[must_use]
    pub fn downgrade(&self) -> WeakCell<T> {
        WeakCell {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Cell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Cell")
            .field("value", &state.value)
            .field("version", &state.version)
            .field("observers", &state.observers.len())
            .finish()
    }
}

/// Weak counterpart of [`Cell`], used by operator callbacks to reference
/// their output without keeping it alive.
pub struct WeakCell<T> {
    shared: Weak<Shared<T>>,
}

impl<T> Clone for WeakCell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> WeakCell<T> {
    /// Upgrades to a strong [`Cell`] handle if the cell is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Cell<T>> {
        self.shared.upgrade().map(|shared| Cell { shared })
    }
}

impl<T> fmt::Debug for WeakCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakCell").finish_non_exhaustive()
    }
}
