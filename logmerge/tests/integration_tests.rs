// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logmerge::prelude::*;
use logmerge_test_utils::{
    entries, random_sorted_sources, sorted_union, FetchTracker, LatentSource, LogEntry,
    RecordingSink, VecSource,
};
use std::time::Duration;

#[test]
fn test_sync_merge_through_facade() -> anyhow::Result<()> {
    // Arrange
    let mut sources = vec![
        VecSource::new(entries(&[1, 4])),
        VecSource::new(entries(&[2, 3])),
    ];
    let mut sink = RecordingSink::new();

    // Act
    sources.merge_into(&mut sink)?;

    // Assert
    assert_eq!(sink.timestamps(), vec![1, 2, 3, 4]);
    assert_eq!(sink.done_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_prefetched_and_plain_latent_merges_agree() -> anyhow::Result<()> {
    // Arrange
    let contents = random_sorted_sources(2024, 6, 15);
    let tracker = FetchTracker::new();
    let latent = |records: Vec<LogEntry>| {
        LatentSource::new(records, Duration::from_millis(1), tracker.clone())
    };

    let mut plain: Vec<_> = contents.iter().cloned().map(latent).collect();
    let mut prefetched = logmerge::prefetch_all(
        contents.iter().cloned().map(latent).collect(),
        PrefetchConfig::default(),
    )?;
    let mut plain_sink = RecordingSink::new();
    let mut prefetched_sink = RecordingSink::new();

    // Act
    plain.merge_into_async(&mut plain_sink).await?;
    merge_sorted_async(&mut prefetched, &mut prefetched_sink).await?;

    // Assert
    assert_eq!(plain_sink.timestamps(), sorted_union(&contents));
    assert_eq!(plain_sink.records(), prefetched_sink.records());
    assert_eq!(prefetched_sink.done_calls(), 1);
    Ok(())
}

#[test]
fn test_custom_record_type() -> anyhow::Result<()> {
    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        sensor: &'static str,
        at_ms: i64,
    }

    impl HasTimestamp for Reading {
        type Timestamp = i64;

        fn timestamp(&self) -> i64 {
            self.at_ms
        }
    }

    // Arrange
    let mut sources = vec![
        VecSource::new(vec![
            Reading { sensor: "a", at_ms: -5 },
            Reading { sensor: "a", at_ms: 10 },
        ]),
        VecSource::new(vec![Reading { sensor: "b", at_ms: 0 }]),
    ];
    let mut sink = RecordingSink::new();

    // Act
    merge_sorted(&mut sources, &mut sink)?;

    // Assert
    let sensors: Vec<_> = sink.records().iter().map(|r| r.sensor).collect();
    assert_eq!(sensors, vec!["a", "b", "a"]);
    assert_eq!(sink.timestamps(), vec![-5, 0, 10]);
    Ok(())
}
