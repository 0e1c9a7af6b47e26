// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for livecell operations.
//!
//! There is no error channel on the data path: cells always deliver values,
//! and "null" payloads are ordinary `Option` values handled by the null-aware
//! operators. [`CellError`] exists only for structurally invalid construction
//! of a combinator, which fails fast at build time.

/// Root error type for invalid combinator construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    /// An N-ary combinator was handed an empty source list.
    ///
    /// Fixed-arity combinators cannot misuse their arity (the type system
    /// prevents it); the empty list is the remaining representable case.
    #[error("combinator requires at least one source")]
    EmptySources,

    /// An operator argument is outside its valid range.
    #[error("invalid operator argument: {context}")]
    InvalidArgument {
        /// Description of the offending argument.
        context: String,
    },
}

impl CellError {
    /// Convenience constructor for [`CellError::InvalidArgument`].
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        CellError::InvalidArgument {
            context: context.into(),
        }
    }
}

/// Result alias used throughout the livecell workspace.
pub type Result<T> = core::result::Result<T, CellError>;
