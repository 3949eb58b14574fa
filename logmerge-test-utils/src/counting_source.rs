// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use logmerge_core::{AsyncSource, Source};

/// Wraps a source and counts how often it is popped.
///
/// Pops made after the inner source reported exhaustion are counted
/// separately; a well-behaved driver never makes any.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    pops: usize,
    pops_after_exhaustion: usize,
    exhausted: bool,
}

impl<S> CountingSource<S> {
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            pops: 0,
            pops_after_exhaustion: 0,
            exhausted: false,
        }
    }

    #[must_use]
    pub const fn pops(&self) -> usize {
        self.pops
    }

    #[must_use]
    pub const fn pops_after_exhaustion(&self) -> usize {
        self.pops_after_exhaustion
    }

    fn observe<T>(&mut self, popped: Option<&T>) {
        self.pops += 1;
        if self.exhausted {
            self.pops_after_exhaustion += 1;
        }
        if popped.is_none() {
            self.exhausted = true;
        }
    }
}

impl<S: Source> Source for CountingSource<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn pop(&mut self) -> Result<Option<S::Item>, S::Error> {
        let popped = self.inner.pop()?;
        self.observe(popped.as_ref());
        Ok(popped)
    }
}

#[async_trait]
impl<S: AsyncSource> AsyncSource for CountingSource<S> {
    type Item = S::Item;
    type Error = S::Error;

    async fn pop(&mut self) -> Result<Option<S::Item>, S::Error> {
        let popped = self.inner.pop().await?;
        self.observe(popped.as_ref());
        Ok(popped)
    }
}
