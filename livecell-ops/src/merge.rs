// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge operator: forward every emission from every source.

use livecell_core::{Cell, CellError, Result};

use crate::util::forward_to;

/// Merges the given cells into one derived cell that forwards any emission
/// from any of them, verbatim, in the order the sources emit. No
/// deduplication is applied and no source is ever detached.
///
/// Sources holding a value at attachment time forward it immediately, so the
/// last such source supplies the initial value of the merged cell.
///
/// # Errors
///
/// [`CellError::EmptySources`] if `sources` is empty.
///
/// # Examples
///
/// ```
/// use livecell_core::Cell;
/// use livecell_ops::merge;
///
/// let a: Cell<i32> = Cell::new();
/// let b: Cell<i32> = Cell::new();
/// let merged = merge(&[a.clone(), b.clone()]).unwrap();
///
/// a.set(1);
/// b.set(2);
/// a.set(3);
/// assert_eq!(merged.value(), Some(3));
/// ```
pub fn merge<T>(sources: &[Cell<T>]) -> Result<Cell<T>>
where
    T: Clone + Send + Sync + 'static,
{
    if sources.is_empty() {
        return Err(CellError::EmptySources);
    }
    Ok(merge_cells(sources))
}

fn merge_cells<T>(sources: &[Cell<T>]) -> Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    let out = Cell::new();
    for source in sources {
        out.add_source(source, forward_to(&out));
    }
    out
}

/// Extension trait providing the [`merge_with`](MergeExt::merge_with)
/// operator.
pub trait MergeExt<T> {
    /// Merges this cell with `others`; see [`merge`].
    fn merge_with(&self, others: &[Cell<T>]) -> Cell<T>;
}

impl<T> MergeExt<T> for Cell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn merge_with(&self, others: &[Cell<T>]) -> Cell<T> {
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(self.clone());
        all.extend_from_slice(others);
        merge_cells(&all)
    }
}
