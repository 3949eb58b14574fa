// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logmerge_core::HasTimestamp;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

/// A record held as the next-to-emit item of the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    pub record: T,
    /// Position of the originating source in the slice handed to the driver
    pub source: usize,
}

impl<T> Candidate<T> {
    pub const fn new(record: T, source: usize) -> Self {
        Self { record, source }
    }
}

/// The working set of a merge: at most one pending candidate per active source,
/// ordered by timestamp ascending.
///
/// Equal timestamps resolve by arrival. The candidates handed to
/// [`initialize`](Frontier::initialize) keep their relative order, and a
/// candidate added later with [`insert`](Frontier::insert) goes ahead of every
/// resident candidate with the same timestamp.
///
/// Backed by a binary heap keyed by `(timestamp, rank)`, so each
/// remove/insert cycle costs O(log n) instead of shifting a sorted array.
pub struct Frontier<T: HasTimestamp> {
    heap: BinaryHeap<Reverse<Slot<T>>>,
    // Ranks handed to inserted candidates count down from -1, below every initial rank.
    next_rank: i64,
}

impl<T: HasTimestamp> Frontier<T> {
    /// Builds the frontier from the first record of every non-empty source.
    #[must_use]
    pub fn initialize(candidates: Vec<Candidate<T>>) -> Self {
        let heap = candidates
            .into_iter()
            .zip(0_i64..)
            .map(|(candidate, rank)| Reverse(Slot::new(candidate, rank)))
            .collect();

        Self {
            heap,
            next_rank: -1,
        }
    }

    /// Removes the candidate with the smallest timestamp.
    ///
    /// Returns `None` once every source has been dropped.
    pub fn remove_min(&mut self) -> Option<Candidate<T>> {
        self.heap.pop().map(|Reverse(slot)| slot.candidate)
    }

    /// Adds the replacement candidate for a source whose previous candidate
    /// was just removed.
    pub fn insert(&mut self, candidate: Candidate<T>) {
        let rank = self.next_rank;
        self.next_rank -= 1;
        self.heap.push(Reverse(Slot::new(candidate, rank)));
    }

    /// Timestamp of the candidate [`remove_min`](Frontier::remove_min) would return.
    #[must_use]
    pub fn peek_timestamp(&self) -> Option<T::Timestamp> {
        self.heap.peek().map(|Reverse(slot)| slot.timestamp)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: HasTimestamp> fmt::Debug for Frontier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.heap.len())
            .field("min", &self.peek_timestamp())
            .finish()
    }
}

struct Slot<T: HasTimestamp> {
    timestamp: T::Timestamp,
    rank: i64,
    candidate: Candidate<T>,
}

impl<T: HasTimestamp> Slot<T> {
    fn new(candidate: Candidate<T>, rank: i64) -> Self {
        Self {
            timestamp: candidate.record.timestamp(),
            rank,
            candidate,
        }
    }
}

impl<T: HasTimestamp> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: HasTimestamp> Eq for Slot<T> {}

impl<T: HasTimestamp> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: HasTimestamp> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then(self.rank.cmp(&other.rank))
    }
}
