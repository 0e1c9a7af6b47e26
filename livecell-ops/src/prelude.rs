// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-export of every operator trait and free function.
//!
//! ```
//! use livecell_ops::prelude::*;
//! ```

pub use crate::amb::{amb, amb_nullable, AmbNulls};
pub use crate::buffer::BufferExt;
pub use crate::combine_latest::{combine_latest, combine_latest3, combine_latest_all};
pub use crate::concat::{concat, concat_singles, ConcatExt};
pub use crate::creating::{from_fn, just, range_of, ToCellExt};
pub use crate::distinct::DistinctExt;
pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::element_at::ElementAtExt;
pub use crate::emit_state::EmitState;
pub use crate::filter::FilterExt;
pub use crate::map::MapExt;
pub use crate::merge::{merge, MergeExt};
pub use crate::nulls::NullExt;
pub use crate::replay::ReplayExt;
pub use crate::sample_with::SampleWithExt;
pub use crate::scan::ScanExt;
pub use crate::single::{FirstExt, FirstOrDefaultExt, SingleCell};
pub use crate::skip::SkipExt;
pub use crate::start_with::StartWithExt;
pub use crate::take::TakeExt;
pub use crate::tap::TapExt;
pub use crate::zip::{zip, zip3, zip_pair, zip_triple};

pub use livecell_core::{Cell, CellError, ObserverControl, Result, Subscription};
