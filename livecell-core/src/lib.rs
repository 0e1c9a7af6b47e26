// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core primitive for the livecell workspace: a single-slot observable value
//! container ([`Cell`]) with synchronous multicast notification, disposable
//! subscriptions and a derived-cell capability (dynamic source bindings).
//!
//! The combinator operators live in the `livecell-ops` crate; this crate only
//! supplies the container they are built on.

#![allow(clippy::multiple_crate_versions)]

pub mod cell;
pub mod error;
mod logging;
pub mod source;
pub mod subscription;

pub use self::cell::{Cell, ObserverControl, WeakCell};
pub use self::error::{CellError, Result};
pub use self::source::SourceKey;
pub use self::subscription::Subscription;
