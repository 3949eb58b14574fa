// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::frontier::{Candidate, Frontier};
use crate::logging::{log_debug, log_info};
use crate::sync_merge::replacement;
use async_trait::async_trait;
use futures::future::try_join_all;
use logmerge_core::{AsyncSource, HasTimestamp, MergeError, Result, Sink};

/// Merges latent sources into one time-ordered output.
///
/// Same algorithm and guarantees as [`merge_sorted`](crate::merge_sorted).
/// The first record of every source is fetched concurrently, since the heads
/// are independent and their relative order is only decided once all of them
/// have arrived. After that exactly one pop is in flight at a time: the
/// replacement for the emitted record has to be known before the next
/// minimum can be chosen.
///
/// Wrap sources in [`PrefetchSource`](crate::PrefetchSource) to overlap their
/// fetch latency with the merge loop.
///
/// # Errors
///
/// Same as [`merge_sorted`](crate::merge_sorted). A failing head fetch aborts
/// the start-up fan-out before anything is emitted.
pub async fn merge_sorted_async<S, K>(sources: &mut [S], sink: &mut K) -> Result<()>
where
    S: AsyncSource,
    K: Sink<S::Item> + ?Sized,
{
    let source_count = sources.len();
    let heads = try_join_all(
        sources
            .iter_mut()
            .enumerate()
            .map(|(index, source)| async move {
                let head = pop_from(source, index).await?;
                Ok::<_, MergeError>(head.map(|record| Candidate::new(record, index)))
            }),
    )
    .await?;

    let initial: Vec<_> = heads.into_iter().flatten().collect();
    if initial.len() < source_count {
        log_debug!(
            "{} of {} sources exhausted before yielding a record",
            source_count - initial.len(),
            source_count
        );
    }

    let mut frontier = Frontier::initialize(initial);
    let mut emitted = 0_usize;

    while let Some(Candidate { record, source }) = frontier.remove_min() {
        let emitted_at = record.timestamp();
        sink.emit(record).map_err(MergeError::sink)?;
        emitted += 1;

        match pop_from(&mut sources[source], source).await? {
            Some(next) => frontier.insert(replacement(next, source, emitted_at)?),
            None => log_debug!("source {} exhausted", source),
        }
    }

    sink.done().map_err(MergeError::sink)?;
    log_info!("async merge complete: {} records from {} sources", emitted, source_count);
    Ok(())
}

async fn pop_from<S: AsyncSource>(source: &mut S, index: usize) -> Result<Option<S::Item>> {
    source
        .pop()
        .await
        .map_err(|error| MergeError::source_fetch(index, error))
}

/// Extension trait for merging a slice (or `Vec`) of latent sources in place.
#[async_trait]
pub trait MergeSortedAsyncExt<S: AsyncSource> {
    /// Merges every source into `sink`. See [`merge_sorted_async`].
    ///
    /// # Errors
    /// Propagates the first source, sink or ordering failure.
    async fn merge_into_async<K>(&mut self, sink: &mut K) -> Result<()>
    where
        K: Sink<S::Item> + Send + ?Sized;
}

#[async_trait]
impl<S: AsyncSource> MergeSortedAsyncExt<S> for [S] {
    async fn merge_into_async<K>(&mut self, sink: &mut K) -> Result<()>
    where
        K: Sink<S::Item> + Send + ?Sized,
    {
        merge_sorted_async(self, sink).await
    }
}
