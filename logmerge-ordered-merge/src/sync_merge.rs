// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::frontier::{Candidate, Frontier};
use crate::logging::{log_debug, log_info, log_warn};
use logmerge_core::{HasTimestamp, MergeError, Result, Sink, Source};

/// Merges sources that each yield records oldest-first into one time-ordered
/// output, pulling records one blocking pop at a time.
///
/// Every source is popped once up front; after that the earliest candidate is
/// emitted and replaced by the next record of the same source until all
/// sources are exhausted. The sink then receives exactly one `done` call.
///
/// A source is never popped again after it reported exhaustion, so a source
/// holding `m` records sees exactly `m + 1` pops.
///
/// # Errors
///
/// * [`MergeError::SourceFetch`] when a pop fails.
/// * [`MergeError::SinkFailure`] when the sink rejects a record or `done`.
/// * [`MergeError::InvariantViolation`] when a source yields a record older
///   than the one it replaces.
///
/// The merge stops at the first error. Records already emitted stay emitted
/// and `done` is not called.
///
/// # Examples
///
/// ```
/// use logmerge_core::{Record, Sink, Source};
/// use logmerge_ordered_merge::merge_sorted;
/// use std::collections::VecDeque;
/// use std::convert::Infallible;
///
/// struct Lines(VecDeque<Record<u64, &'static str>>);
///
/// impl Source for Lines {
///     type Item = Record<u64, &'static str>;
///     type Error = Infallible;
///     fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
///         Ok(self.0.pop_front())
///     }
/// }
///
/// struct Printer(Vec<u64>);
///
/// impl Sink<Record<u64, &'static str>> for Printer {
///     type Error = Infallible;
///     fn emit(&mut self, record: Record<u64, &'static str>) -> Result<(), Infallible> {
///         self.0.push(record.timestamp);
///         Ok(())
///     }
///     fn done(&mut self) -> Result<(), Infallible> {
///         Ok(())
///     }
/// }
///
/// let mut sources = vec![
///     Lines(VecDeque::from(vec![Record::new(1, "a"), Record::new(4, "d")])),
///     Lines(VecDeque::from(vec![Record::new(2, "b"), Record::new(3, "c")])),
/// ];
/// let mut printer = Printer(Vec::new());
///
/// merge_sorted(&mut sources, &mut printer).unwrap();
/// assert_eq!(printer.0, vec![1, 2, 3, 4]);
/// ```
pub fn merge_sorted<S, K>(sources: &mut [S], sink: &mut K) -> Result<()>
where
    S: Source,
    K: Sink<S::Item> + ?Sized,
{
    let mut initial = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter_mut().enumerate() {
        match pop_from(source, index)? {
            Some(record) => initial.push(Candidate::new(record, index)),
            None => log_debug!("source {} exhausted before yielding a record", index),
        }
    }

    let mut frontier = Frontier::initialize(initial);
    let mut emitted = 0_usize;

    while let Some(Candidate { record, source }) = frontier.remove_min() {
        let emitted_at = record.timestamp();
        sink.emit(record).map_err(MergeError::sink)?;
        emitted += 1;

        match pop_from(&mut sources[source], source)? {
            Some(next) => frontier.insert(replacement(next, source, emitted_at)?),
            None => log_debug!("source {} exhausted", source),
        }
    }

    sink.done().map_err(MergeError::sink)?;
    log_info!("sync merge complete: {} records from {} sources", emitted, sources.len());
    Ok(())
}

fn pop_from<S: Source>(source: &mut S, index: usize) -> Result<Option<S::Item>> {
    source
        .pop()
        .map_err(|error| MergeError::source_fetch(index, error))
}

/// Pairs the record fetched to replace the one just emitted with its source.
///
/// A record older than its predecessor means the source is not sorted, and the
/// output could no longer be non-decreasing.
pub(crate) fn replacement<T: HasTimestamp>(
    record: T,
    source: usize,
    previous: T::Timestamp,
) -> Result<Candidate<T>> {
    let timestamp = record.timestamp();
    if timestamp < previous {
        log_warn!(
            "source {} yielded {:?} after {:?}; aborting merge",
            source,
            timestamp,
            previous
        );
        return Err(MergeError::invariant_violation(format!(
            "source {source} yielded {timestamp:?} after {previous:?}"
        )));
    }
    Ok(Candidate::new(record, source))
}

/// Extension trait for merging a slice (or `Vec`) of sources in place.
pub trait MergeSortedExt<S: Source> {
    /// Merges every source into `sink`. See [`merge_sorted`].
    ///
    /// # Errors
    /// Propagates the first source, sink or ordering failure.
    fn merge_into<K>(&mut self, sink: &mut K) -> Result<()>
    where
        K: Sink<S::Item> + ?Sized;
}

impl<S: Source> MergeSortedExt<S> for [S] {
    fn merge_into<K>(&mut self, sink: &mut K) -> Result<()>
    where
        K: Sink<S::Item> + ?Sized,
    {
        merge_sorted(self, sink)
    }
}
