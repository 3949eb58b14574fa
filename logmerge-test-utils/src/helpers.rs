// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::LogEntry;

/// Panics unless every timestamp is at least the one before it.
pub fn assert_non_decreasing(timestamps: &[u64]) {
    if let Some(position) = timestamps.windows(2).position(|pair| pair[0] > pair[1]) {
        panic!(
            "output went back in time at position {}: {} then {}",
            position + 1,
            timestamps[position],
            timestamps[position + 1]
        );
    }
}

/// Every timestamp of every source, sorted: what a correct merge must emit.
#[must_use]
pub fn sorted_union(sources: &[Vec<LogEntry>]) -> Vec<u64> {
    let mut all: Vec<u64> = sources
        .iter()
        .flat_map(|source| source.iter().map(|entry| entry.timestamp))
        .collect();
    all.sort_unstable();
    all
}
