// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combinator operators over [`livecell_core::Cell`].
//!
//! Every operator consumes one or more cells and returns a fresh derived
//! cell, wired as a dependent of its sources. Multi-source combinators
//! (`zip`, `combine_latest`, `amb`, `concat`, `merge`) are free functions;
//! single-source operators are extension-trait methods on `Cell<T>`,
//! re-exported through [`prelude`].
//!
//! ```
//! use livecell_core::Cell;
//! use livecell_ops::prelude::*;
//!
//! let numbers: Cell<i32> = Cell::new();
//! let even_squares = numbers.filter(|n| n % 2 == 0).map(|n| n * n);
//!
//! numbers.set(3);
//! numbers.set(4);
//! assert_eq!(even_squares.value(), Some(16));
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod amb;
pub mod buffer;
pub mod combine_latest;
pub mod concat;
pub mod creating;
pub mod distinct;
pub mod distinct_until_changed;
pub mod element_at;
pub mod emit_state;
pub mod filter;
mod logging;
pub mod map;
pub mod merge;
pub mod nulls;
pub mod prelude;
pub mod replay;
pub mod sample_with;
pub mod scan;
pub mod single;
pub mod skip;
pub mod start_with;
pub mod take;
pub mod tap;
mod util;
pub mod zip;

pub use self::amb::{amb, amb_nullable, AmbNulls};
pub use self::combine_latest::{combine_latest, combine_latest3, combine_latest_all};
pub use self::concat::{concat, concat_singles};
pub use self::creating::{from_fn, just, range_of};
pub use self::emit_state::EmitState;
pub use self::merge::merge;
pub use self::single::SingleCell;
pub use self::zip::{zip, zip3, zip_pair, zip_triple};
