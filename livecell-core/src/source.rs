// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source bindings for derived cells.
//!
//! A derived cell owns one binding per upstream source it observes. The
//! binding holds the upstream subscription (and with it a strong reference to
//! the upstream cell), so a pipeline stays alive as long as its final cell
//! does. Removing a binding disposes the subscription.

use std::collections::HashMap;

use crate::subscription::Subscription;

/// Opaque key identifying one source binding of a derived cell.
///
/// Returned by [`Cell::add_source`](crate::Cell::add_source) and consumed by
/// [`Cell::remove_source`](crate::Cell::remove_source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey(u64);

#[derive(Default)]
pub(crate) struct SourceRegistry {
    next_key: u64,
    bindings: HashMap<u64, Subscription>,
}

impl SourceRegistry {
    pub(crate) fn insert(&mut self, subscription: Subscription) -> SourceKey {
        let key = self.next_key;
        self.next_key += 1;
        self.bindings.insert(key, subscription);
        SourceKey(key)
    }

    pub(crate) fn remove(&mut self, key: SourceKey) -> Option<Subscription> {
        self.bindings.remove(&key.0)
    }

    pub(crate) fn drain(&mut self) -> Vec<Subscription> {
        self.bindings.drain().map(|(_, sub)| sub).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }
}
