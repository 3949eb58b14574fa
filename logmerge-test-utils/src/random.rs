// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::{entry, LogEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `count` sources of up to `max_len` entries each, every source
/// sorted by timestamp. Timestamps collide across sources on purpose.
///
/// The same seed always produces the same sources.
#[must_use]
pub fn random_sorted_sources(seed: u64, count: usize, max_len: usize) -> Vec<Vec<LogEntry>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|source| {
            let len = rng.random_range(0..=max_len);
            let mut timestamp = rng.random_range(0..100_u64);
            (0..len)
                .map(|position| {
                    timestamp += rng.random_range(0..10_u64);
                    entry(timestamp, &format!("source {source} line {position}"))
                })
                .collect()
        })
        .collect()
}
