// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Read-ahead for latent sources.
//!
//! The async driver keeps a single pop in flight once the merge is running,
//! so every emitted record pays the full latency of one fetch. A
//! [`PrefetchSource`] moves that latency off the merge loop: a background
//! task keeps popping its source into a bounded queue, and the driver pops
//! from the queue instead. The merge itself is unchanged.

use crate::logging::log_debug;
use async_trait::async_trait;
use logmerge_core::{AsyncSource, MergeError, Result};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default number of records fetched ahead per source.
pub const DEFAULT_PREFETCH_CAPACITY: usize = 16;

/// Read-ahead settings for [`PrefetchSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Records buffered ahead of the merge, per source
    pub capacity: usize,
}

impl PrefetchConfig {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// # Errors
    /// Returns [`MergeError::InvalidConfig`] when `capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(MergeError::invalid_config("prefetch capacity must be at least 1"));
        }
        Ok(())
    }
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFETCH_CAPACITY)
    }
}

/// Failure reported by a [`PrefetchSource`].
#[derive(Debug, thiserror::Error)]
pub enum PrefetchError<E> {
    /// The wrapped source failed while fetching ahead
    #[error("prefetched source failed: {0}")]
    Source(#[source] E),

    /// The background task ended without reporting exhaustion (it panicked or was aborted)
    #[error("prefetch worker stopped before the source was exhausted")]
    WorkerStopped,
}

type Fetched<S> = std::result::Result<Option<<S as AsyncSource>::Item>, <S as AsyncSource>::Error>;

/// An [`AsyncSource`] that pops its inner source ahead of demand on a
/// background tokio task.
///
/// Records come out in the order the inner source yields them. Exhaustion is
/// sticky, and so is failure: after the inner error has been delivered once,
/// further pops report exhaustion. Dropping the wrapper aborts the worker.
pub struct PrefetchSource<S: AsyncSource> {
    receiver: mpsc::Receiver<Fetched<S>>,
    worker: JoinHandle<()>,
    finished: bool,
}

impl<S> PrefetchSource<S>
where
    S: AsyncSource + 'static,
{
    /// Takes ownership of `source` and starts fetching ahead on the current
    /// tokio runtime.
    ///
    /// # Errors
    /// Returns [`MergeError::InvalidConfig`] for a zero capacity or when no
    /// tokio runtime is running.
    pub fn spawn(source: S, config: PrefetchConfig) -> Result<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| {
            MergeError::invalid_config("prefetching requires a running tokio runtime")
        })?;

        let (sender, receiver) = mpsc::channel(config.capacity);
        let worker = runtime.spawn(fetch_ahead(source, sender));

        Ok(Self {
            receiver,
            worker,
            finished: false,
        })
    }
}

/// Wraps every source in a [`PrefetchSource`] sharing the same settings.
///
/// # Errors
/// Same as [`PrefetchSource::spawn`]. Workers already started are aborted
/// when the error is returned.
pub fn prefetch_all<S>(sources: Vec<S>, config: PrefetchConfig) -> Result<Vec<PrefetchSource<S>>>
where
    S: AsyncSource + 'static,
{
    sources
        .into_iter()
        .map(|source| PrefetchSource::spawn(source, config))
        .collect()
}

async fn fetch_ahead<S: AsyncSource>(mut source: S, sender: mpsc::Sender<Fetched<S>>) {
    loop {
        let fetched = source.pop().await;
        let last = !matches!(fetched, Ok(Some(_)));

        if sender.send(fetched).await.is_err() {
            log_debug!("prefetch consumer dropped; stopping worker");
            return;
        }
        if last {
            return;
        }
    }
}

#[async_trait]
impl<S> AsyncSource for PrefetchSource<S>
where
    S: AsyncSource + 'static,
{
    type Item = S::Item;
    type Error = PrefetchError<S::Error>;

    async fn pop(&mut self) -> std::result::Result<Option<S::Item>, Self::Error> {
        if self.finished {
            return Ok(None);
        }

        match self.receiver.recv().await {
            Some(Ok(Some(record))) => Ok(Some(record)),
            Some(Ok(None)) => {
                self.finished = true;
                Ok(None)
            }
            Some(Err(error)) => {
                self.finished = true;
                Err(PrefetchError::Source(error))
            }
            None => {
                self.finished = true;
                Err(PrefetchError::WorkerStopped)
            }
        }
    }
}

impl<S: AsyncSource> Drop for PrefetchSource<S> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
