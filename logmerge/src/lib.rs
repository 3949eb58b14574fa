// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # logmerge
//!
//! Merges many record sources, each already ordered by timestamp, into a
//! single time-ordered output that is emitted as soon as it is known.
//!
//! ## Overview
//!
//! - A [`Source`] (or latent [`AsyncSource`]) yields its records oldest-first,
//!   one pop at a time, and reports exhaustion with `Ok(None)`.
//! - A [`Sink`] receives the merged records in non-decreasing timestamp order,
//!   then a single `done`.
//! - [`merge_sorted`] and [`merge_sorted_async`] drive the merge; both keep
//!   exactly one pending record per active source.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logmerge::prelude::*;
//! use std::convert::Infallible;
//!
//! struct Stdout;
//!
//! impl Sink<Record<u64, String>> for Stdout {
//!     type Error = Infallible;
//!
//!     fn emit(&mut self, record: Record<u64, String>) -> Result<(), Infallible> {
//!         println!("{record}");
//!         Ok(())
//!     }
//!
//!     fn done(&mut self) -> Result<(), Infallible> {
//!         println!("-- end of logs --");
//!         Ok(())
//!     }
//! }
//!
//! # type Boxed = Box<dyn AsyncSource<Item = Record<u64, String>, Error = Infallible>>;
//! # async fn run(mut sources: Vec<Boxed>) -> logmerge::Result<()> {
//! merge_sorted_async(&mut sources, &mut Stdout).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! The first failing pop or sink call aborts the merge with a [`MergeError`].
//! Nothing is retried; records already emitted stay emitted and `done` is
//! not signalled.

// Re-export core types
pub use logmerge_core::{AsyncSource, HasTimestamp, MergeError, Record, Result, Sink, Source};

// Re-export the merge drivers
pub use logmerge_ordered_merge::{
    merge_sorted, merge_sorted_async, prefetch_all, Candidate, Frontier, MergeSortedAsyncExt,
    MergeSortedExt, PrefetchConfig, PrefetchError, PrefetchSource,
};

/// Everything needed to implement sources and sinks and run a merge.
pub mod prelude {
    pub use crate::{
        merge_sorted, merge_sorted_async, AsyncSource, HasTimestamp, MergeError,
        MergeSortedAsyncExt, MergeSortedExt, PrefetchConfig, PrefetchSource, Record, Sink, Source,
    };
}
