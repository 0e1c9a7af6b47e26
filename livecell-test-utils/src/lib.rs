// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the livecell workspace: a recording observer, emission
//! assertions, and small named test values.

pub mod helpers;
pub mod recorder;
pub mod test_value;

pub use self::recorder::Recorder;
pub use self::test_value::{
    alice, bob, charlie, cat, dog, rose, sunflower, TestValue,
};
