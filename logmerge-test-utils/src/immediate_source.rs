// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::executor::block_on;
use logmerge_core::{AsyncSource, Source};

/// A blocking view of an async source whose pops resolve without waiting on
/// a runtime (for example a [`VecSource`](crate::VecSource)).
///
/// Lets the sync and async drivers be run over the very same source contents.
/// Do not wrap sources that depend on tokio timers or I/O.
#[derive(Debug)]
pub struct ImmediateSource<S> {
    inner: S,
}

impl<S> ImmediateSource<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: AsyncSource> Source for ImmediateSource<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn pop(&mut self) -> Result<Option<S::Item>, S::Error> {
        block_on(self.inner.pop())
    }
}
