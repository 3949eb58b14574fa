// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logmerge_core::{AsyncSource, MergeError};
use logmerge_ordered_merge::{
    merge_sorted_async, prefetch_all, PrefetchConfig, PrefetchError, PrefetchSource,
    DEFAULT_PREFETCH_CAPACITY,
};
use logmerge_test_utils::{
    random_sorted_sources, sorted_union, FailingSource, FetchTracker, LatentSource,
    RecordingSink, TestError, VecSource,
};
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;

#[test]
fn test_default_config() {
    let config = PrefetchConfig::default();

    assert_eq!(config.capacity, DEFAULT_PREFETCH_CAPACITY);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_capacity_is_rejected() {
    let error = PrefetchConfig::new(0).validate().expect_err("zero capacity");

    assert!(matches!(error, MergeError::InvalidConfig { .. }));
}

#[test]
fn test_spawn_requires_runtime() {
    let result = PrefetchSource::spawn(VecSource::from_timestamps(&[1]), PrefetchConfig::default());

    let error = result.err().expect("no runtime is running");
    assert_eq!(
        error.to_string(),
        "Invalid configuration: prefetching requires a running tokio runtime"
    );
}

#[tokio::test]
async fn test_spawn_rejects_zero_capacity() {
    let result = PrefetchSource::spawn(VecSource::from_timestamps(&[1]), PrefetchConfig::new(0));

    assert!(matches!(result, Err(MergeError::InvalidConfig { .. })));
}

#[tokio::test]
async fn test_yields_in_source_order_then_stays_exhausted() -> anyhow::Result<()> {
    // Arrange
    let mut source =
        PrefetchSource::spawn(VecSource::from_timestamps(&[1, 2, 3]), PrefetchConfig::new(2))?;

    // Act
    let mut seen = Vec::new();
    while let Some(record) = source.pop().await? {
        seen.push(record.timestamp);
    }

    // Assert
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(source.pop().await?.is_none());
    assert!(source.pop().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_source_error_is_delivered_once() -> anyhow::Result<()> {
    // Arrange
    let mut source =
        PrefetchSource::spawn(FailingSource::after(&[1], "timeout"), PrefetchConfig::default())?;

    // Act
    let first = source.pop().await;
    let second = source.pop().await;
    let third = source.pop().await;

    // Assert
    assert_eq!(first.ok().flatten().map(|r| r.timestamp), Some(1));
    assert!(matches!(
        second,
        Err(PrefetchError::Source(TestError::Fetch(ref reason))) if reason == "timeout"
    ));
    assert!(matches!(third, Ok(None)));
    Ok(())
}

#[tokio::test]
async fn test_reads_ahead_up_to_capacity() -> anyhow::Result<()> {
    // Arrange
    let tracker = FetchTracker::new();
    let timestamps: Vec<u64> = (0..10).collect();
    let latent = LatentSource::from_timestamps(&timestamps, Duration::from_millis(1), &tracker);

    // Act
    let source = PrefetchSource::spawn(latent, PrefetchConfig::new(4))?;
    sleep(Duration::from_millis(100)).await;

    // Assert
    // Four records wait in the queue and a fifth is held by the blocked worker.
    assert_eq!(tracker.history().len(), 5);

    drop(source);
    sleep(Duration::from_millis(20)).await;
    assert_eq!(tracker.history().len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_merge_over_prefetched_latent_sources() -> anyhow::Result<()> {
    // Arrange
    let tracker = FetchTracker::new();
    let contents = random_sorted_sources(42, 4, 12);
    let latent: Vec<_> = contents
        .iter()
        .cloned()
        .map(|records| LatentSource::new(records, Duration::from_millis(1), tracker.clone()))
        .collect();
    let mut sources = prefetch_all(latent, PrefetchConfig::new(3))?;
    let mut sink = RecordingSink::new();

    // Act
    merge_sorted_async(&mut sources, &mut sink).await?;

    // Assert
    assert_eq!(sink.timestamps(), sorted_union(&contents));
    assert_eq!(sink.done_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_prefetched_failure_aborts_merge() {
    // Arrange
    let sources = vec![
        FailingSource::after(&[1, 4], "unused"),
        FailingSource::after(&[2], "socket closed"),
    ];
    let mut sources = prefetch_all(sources, PrefetchConfig::default()).expect("runtime is running");
    let mut sink = RecordingSink::new();

    // Act
    let error = merge_sorted_async(&mut sources, &mut sink)
        .await
        .expect_err("merge should fail");

    // Assert
    assert_eq!(error.source_index(), Some(1));
    let cause = error.source().expect("prefetch error");
    assert_eq!(cause.to_string(), "prefetched source failed: fetch failed: socket closed");
    assert_eq!(sink.timestamps(), vec![1, 2]);
    assert_eq!(sink.done_calls(), 0);
}
