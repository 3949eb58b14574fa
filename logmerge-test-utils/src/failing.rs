// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources and sinks that fail on purpose, for error propagation tests.

use crate::fixtures::{entries, LogEntry};
use async_trait::async_trait;
use logmerge_core::{AsyncSource, Sink, Source};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("sink rejected: {0}")]
    Rejected(String),
}

/// Yields its records, then fails on every further pop.
#[derive(Debug)]
pub struct FailingSource {
    records: VecDeque<LogEntry>,
    reason: String,
}

impl FailingSource {
    #[must_use]
    pub fn after(timestamps: &[u64], reason: &str) -> Self {
        Self {
            records: entries(timestamps).into(),
            reason: reason.to_string(),
        }
    }

    fn next(&mut self) -> Result<Option<LogEntry>, TestError> {
        match self.records.pop_front() {
            Some(record) => Ok(Some(record)),
            None => Err(TestError::Fetch(self.reason.clone())),
        }
    }
}

impl Source for FailingSource {
    type Item = LogEntry;
    type Error = TestError;

    fn pop(&mut self) -> Result<Option<LogEntry>, TestError> {
        self.next()
    }
}

#[async_trait]
impl AsyncSource for FailingSource {
    type Item = LogEntry;
    type Error = TestError;

    async fn pop(&mut self) -> Result<Option<LogEntry>, TestError> {
        self.next()
    }
}

/// Accepts a fixed number of records, then rejects the next emit.
/// Optionally rejects `done` as well.
#[derive(Debug, Default)]
pub struct FailingSink {
    accepted: Vec<u64>,
    capacity: usize,
    reject_done: bool,
}

impl FailingSink {
    #[must_use]
    pub fn accepting(capacity: usize) -> Self {
        Self {
            accepted: Vec::new(),
            capacity,
            reject_done: false,
        }
    }

    /// Accepts every record but fails the completion signal.
    #[must_use]
    pub fn rejecting_done() -> Self {
        Self {
            accepted: Vec::new(),
            capacity: usize::MAX,
            reject_done: true,
        }
    }

    #[must_use]
    pub fn accepted(&self) -> &[u64] {
        &self.accepted
    }
}

impl Sink<LogEntry> for FailingSink {
    type Error = TestError;

    fn emit(&mut self, record: LogEntry) -> Result<(), TestError> {
        if self.accepted.len() >= self.capacity {
            return Err(TestError::Rejected(record.payload));
        }
        self.accepted.push(record.timestamp);
        Ok(())
    }

    fn done(&mut self) -> Result<(), TestError> {
        if self.reject_done {
            return Err(TestError::Rejected("done".to_string()));
        }
        Ok(())
    }
}
