// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logmerge_core::{HasTimestamp, Sink};
use std::convert::Infallible;

/// Captures everything a merge emits, plus how many times `done` was signalled.
#[derive(Debug)]
pub struct RecordingSink<T> {
    records: Vec<T>,
    done_calls: usize,
    emits_after_done: usize,
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            done_calls: 0,
            emits_after_done: 0,
        }
    }
}

impl<T> RecordingSink<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    #[must_use]
    pub const fn done_calls(&self) -> usize {
        self.done_calls
    }

    #[must_use]
    pub const fn emits_after_done(&self) -> usize {
        self.emits_after_done
    }
}

impl<T: HasTimestamp> RecordingSink<T> {
    #[must_use]
    pub fn timestamps(&self) -> Vec<T::Timestamp> {
        self.records.iter().map(HasTimestamp::timestamp).collect()
    }
}

impl<T> Sink<T> for RecordingSink<T> {
    type Error = Infallible;

    fn emit(&mut self, record: T) -> Result<(), Infallible> {
        if self.done_calls > 0 {
            self.emits_after_done += 1;
        }
        self.records.push(record);
        Ok(())
    }

    fn done(&mut self) -> Result<(), Infallible> {
        self.done_calls += 1;
        Ok(())
    }
}
