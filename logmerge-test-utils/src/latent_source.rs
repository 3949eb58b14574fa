// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::{entries, LogEntry};
use async_trait::async_trait;
use logmerge_core::{AsyncSource, HasTimestamp};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Shared record of how many pops were in flight across a group of sources.
///
/// Every pop logs the number of pops in flight when it started (itself
/// included), so a test can tell the concurrent start-up fan-out apart from
/// the one-at-a-time replacement pops that follow.
#[derive(Debug, Clone, Default)]
pub struct FetchTracker {
    in_flight: Arc<AtomicUsize>,
    started: Arc<Mutex<Vec<usize>>>,
}

impl FetchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// In-flight counts observed at the start of each pop, in start order.
    #[must_use]
    pub fn history(&self) -> Vec<usize> {
        self.started.lock().clone()
    }

    #[must_use]
    pub fn peak(&self) -> usize {
        self.history().into_iter().max().unwrap_or(0)
    }

    fn begin(&self) {
        let now = self.in_flight.fetch_add(1, SeqCst) + 1;
        self.started.lock().push(now);
    }

    fn end(&self) {
        self.in_flight.fetch_sub(1, SeqCst);
    }
}

/// An async source that sleeps for a fixed delay before every pop, like a
/// source backed by a disk or a network fetch.
#[derive(Debug)]
pub struct LatentSource<T> {
    records: VecDeque<T>,
    delay: Duration,
    tracker: FetchTracker,
}

impl<T> LatentSource<T> {
    pub fn new(records: Vec<T>, delay: Duration, tracker: FetchTracker) -> Self {
        Self {
            records: records.into(),
            delay,
            tracker,
        }
    }
}

impl LatentSource<LogEntry> {
    #[must_use]
    pub fn from_timestamps(timestamps: &[u64], delay: Duration, tracker: &FetchTracker) -> Self {
        Self::new(entries(timestamps), delay, tracker.clone())
    }
}

#[async_trait]
impl<T: HasTimestamp + Send> AsyncSource for LatentSource<T> {
    type Item = T;
    type Error = Infallible;

    async fn pop(&mut self) -> Result<Option<T>, Infallible> {
        self.tracker.begin();
        sleep(self.delay).await;
        self.tracker.end();
        Ok(self.records.pop_front())
    }
}
