// Copyright 2025 the livecell authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::operator_bench::{bench_broadcast, bench_pipelines};
use criterion::{criterion_group, criterion_main};


criterion_group!(benches, bench_broadcast, bench_pipelines);
criterion_main!(benches);
