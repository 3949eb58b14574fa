// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0


use async_merge_bench::bench_merge_sorted_async;
use criterion::{criterion_group, criterion_main};
use sync_merge_bench::bench_merge_sorted;

criterion_group!(merge_benches, bench_merge_sorted, bench_merge_sorted_async);
criterion_main!(merge_benches);
