// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Small named test values used across the integration tests.

/// A heterogeneous test payload with three variants, enough to tell sources
/// apart in multi-source combinator tests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TestValue {
    Person(String),
    Animal(String),
    Plant(String),
}

pub fn alice() -> TestValue {
    TestValue::Person("Alice".to_owned())
}

pub fn bob() -> TestValue {
    TestValue::Person("Bob".to_owned())
}

pub fn charlie() -> TestValue {
    TestValue::Person("Charlie".to_owned())
}

pub fn dog() -> TestValue {
    TestValue::Animal("Dog".to_owned())
}

pub fn cat() -> TestValue {
    TestValue::Animal("Cat".to_owned())
}

pub fn rose() -> TestValue {
    TestValue::Plant("Rose".to_owned())
}

pub fn sunflower() -> TestValue {
    TestValue::Plant("Sunflower".to_owned())
}
