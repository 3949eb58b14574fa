// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Incremental k-way merge of record sources that are each ordered by
//! timestamp.
//!
//! The [`Frontier`] holds the next unseen record of every active source. Each
//! cycle emits its minimum and replaces it with the next record of the same
//! source, so output starts flowing immediately and nothing beyond one record
//! per source is ever buffered.
//!
//! * [`merge_sorted`] pulls from [`Source`](logmerge_core::Source)s with blocking pops.
//! * [`merge_sorted_async`] pulls from [`AsyncSource`](logmerge_core::AsyncSource)s,
//!   fetching the initial heads concurrently.
//! * [`PrefetchSource`] fetches ahead on a background task for latent sources.

#![allow(clippy::multiple_crate_versions)]
mod logging;

pub mod async_merge;
pub mod frontier;
pub mod prefetch;
pub mod sync_merge;

pub use async_merge::{merge_sorted_async, MergeSortedAsyncExt};
pub use frontier::{Candidate, Frontier};
pub use prefetch::{
    prefetch_all, PrefetchConfig, PrefetchError, PrefetchSource, DEFAULT_PREFETCH_CAPACITY,
};
pub use sync_merge::{merge_sorted, MergeSortedExt};
