// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion helpers shared by the integration tests.

use std::fmt::Debug;

use crate::recorder::Recorder;

/// Asserts that `recorder` saw exactly `expected`, in order.
pub fn expect_values<T>(recorder: &Recorder<T>, expected: &[T])
where
    T: Clone + Debug + PartialEq + Send + Sync + 'static,
{
    assert_eq!(recorder.values(), expected);
}

/// Asserts that `recorder` saw nothing.
pub fn expect_no_emission<T>(recorder: &Recorder<T>)
where
    T: Clone + Debug + Send + Sync + 'static,
{
    let values = recorder.values();
    assert!(
        values.is_empty(),
        "expected no emissions, recorded {values:?}"
    );
}

/// Asserts on the most recent emission only.
pub fn expect_last<T>(recorder: &Recorder<T>, expected: T)
where
    T: Clone + Debug + PartialEq + Send + Sync + 'static,
{
    assert_eq!(recorder.last(), Some(expected));
}
