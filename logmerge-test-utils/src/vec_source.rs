// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::{entries, LogEntry};
use async_trait::async_trait;
use logmerge_core::{AsyncSource, HasTimestamp, Source};
use std::collections::VecDeque;
use std::convert::Infallible;

/// An in-memory source popping its records front to back.
///
/// Usable with both drivers; the async pop resolves immediately.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    records: VecDeque<T>,
}

impl<T> VecSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl VecSource<LogEntry> {
    #[must_use]
    pub fn from_timestamps(timestamps: &[u64]) -> Self {
        Self::new(entries(timestamps))
    }
}

impl<T: HasTimestamp> Source for VecSource<T> {
    type Item = T;
    type Error = Infallible;

    fn pop(&mut self) -> Result<Option<T>, Infallible> {
        Ok(self.records.pop_front())
    }
}

#[async_trait]
impl<T: HasTimestamp + Send> AsyncSource for VecSource<T> {
    type Item = T;
    type Error = Infallible;

    async fn pop(&mut self) -> Result<Option<T>, Infallible> {
        Ok(self.records.pop_front())
    }
}
