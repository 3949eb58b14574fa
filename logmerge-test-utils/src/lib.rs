// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the logmerge workspace.
//!
//! This crate provides in-memory sources and sinks for exercising the merge
//! drivers. It is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! - [`VecSource`] - pops a pre-sorted `Vec`, both as a sync and an async source
//! - [`LatentSource`] - sleeps before every pop and reports concurrent fetches
//!   to a [`FetchTracker`]
//! - [`FailingSource`] - yields some records, then fails
//! - [`CountingSource`] - counts pops, including pops after exhaustion
//! - [`ImmediateSource`] - a sync view of an async source that resolves immediately
//! - [`RecordingSink`] / [`FailingSink`] - capture or reject the merged output
//!
//! # Examples
//!
//! ```rust
//! use logmerge_core::Source;
//! use logmerge_test_utils::{timestamps, VecSource};
//!
//! let mut source = VecSource::from_timestamps(&[1, 4]);
//! let first = source.pop().unwrap().unwrap();
//! assert_eq!(timestamps(&[first]), vec![1]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod counting_source;
pub mod failing;
pub mod fixtures;
pub mod helpers;
pub mod immediate_source;
pub mod latent_source;
pub mod random;
pub mod recording_sink;
pub mod vec_source;

pub use counting_source::CountingSource;
pub use failing::{FailingSink, FailingSource, TestError};
pub use fixtures::{entries, entry, timestamps, LogEntry};
pub use helpers::{assert_non_decreasing, sorted_union};
pub use immediate_source::ImmediateSource;
pub use latent_source::{FetchTracker, LatentSource};
pub use random::random_sorted_sources;
pub use recording_sink::RecordingSink;
pub use vec_source::VecSource;
